//! Static instruction blocks read by the report-writing agent.

use indoc::{formatdoc, indoc};

pub const REPORT_INSTRUCTIONS: &str = indoc! {"
    LLM Instructions for PR Report Generation
    ==========================================

    GOAL:
      Prepare a report about all needed pull requests.

    STEPS:
      1. Get list of opened pull requests
      2. Read all comments in the pull requests
      3. Provide a report with the comments

    RESTRICTIONS:
      - You shouldn't change the code but just provide the report
"};

pub const ASSESS_INSTRUCTIONS: &str = indoc! {"
    LLM Instructions for PR Comment Assessment
    ===========================================

    GOAL:
      Assess pull request comments and determine if code changes are needed.

    STEPS:
      1. Get list of opened pull requests
      2. Read all comments in the pull requests
      3. Assess each comment to understand:
         - What changes are being requested
         - Whether the comment requires code modifications
         - The priority and impact of the requested changes
         - Any dependencies between comments
      4. Provide a detailed assessment report that includes:
         - Summary of comments requiring action
         - Recommended changes to make
         - Priority order for addressing comments
         - Estimated complexity of each change

    RESTRICTIONS:
      - You should assess and recommend changes, not implement them
      - Focus on actionable insights from the comments
"};

/// Fix-implementation instructions quoting the configured compile command.
pub fn fix_instructions(compile_command: &str) -> String {
    formatdoc! {"
        LLM Instructions for Implementing PR Comment Fixes
        ====================================================

        GOAL:
          Implement code changes based on the assessment from 'assess-instructions' command.

        PREREQUISITES:
          - You must have already run 'assess-instructions' to get the assessment report
          - Review the assessment to understand what changes are needed

        STEPS:
          1. Review the assessment report from the previous step
          2. For each PR that needs changes:
             a. Checkout the relevant branch for that PR
             b. Make the necessary code changes based on the comments
             c. Compile the code to verify changes using:
                {compile_command}
             d. If compilation succeeds, commit the changes with a descriptive message
             e. If compilation fails, fix the errors and repeat from step c
             f. Repeat for all changes in this PR
          3. After all changes are committed, provide a summary of:
             - What was changed in each commit
             - Which comments were addressed
             - Any issues encountered

        RESTRICTIONS:
          - DO commit changes after successful compilation
          - DO NOT push changes to remote repository
          - Always compile before committing
          - Use clear, descriptive commit messages that reference the PR comments
    "}
}
