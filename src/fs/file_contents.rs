//! Contains the constants for file contents.

/// Contents of the blank user-reporters file.
pub static BLANK_USER_REPORTERS_CONTENTS: &str = r#"// Enter your own reporters into this document.
// All entries must come between the two curly brackets, which start and end the
// file. Each entry should include a quoted reporter abbreviation and a tier,
// separated by a colon. The tier must be one of Official, Preferred, or
// Authoritative. Put each reporter on a separate line, with commas after every
// line. Below is an example:
//
// {
//  "WCB":Authoritative,
//  "OAC":Preferred,
// }
//
// Your entries are checked alongside the built-in reporters, and a reporter
// counts toward the highest tier it is listed in. There is also a placeholder
// example below. Feel free to replace that with your own reporters.

{
    "Reporter Abbreviation":Authoritative,
}
"#;
