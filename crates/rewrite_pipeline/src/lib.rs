// crates/rewrite_pipeline/src/lib.rs

//! Converts the REST comment dialect (`@RESTHEADER{..}`, `@RESTPARAM{..}`, …)
//! into plain Markdown.
//!
//!  * **Textual, not structural** – every rule is a regex or literal
//!    substitution over the whole text. Nested or malformed tags produce
//!    best‑effort output instead of an error.
//!  * **Fixed order** – later rules rely on the rewrites done by earlier ones
//!    (e.g. the parameter aliases are folded into `@RESTPARAM` before the
//!    parameter rules run).
//!  * **Stateless** – a rule that matches nothing is a no‑op.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// One step of the pipeline.
pub struct Rule {
    pub name: &'static str,
    func: fn(&str) -> String,
}

impl Rule {
    pub fn apply(&self, text: &str) -> String {
        (self.func)(text)
    }
}

/// The pipeline, in the order it is applied.
pub static RULES: &[Rule] = &[
    Rule { name: "strip_html_comments", func: strip_html_comments },
    Rule { name: "strip_brief", func: strip_brief },
    Rule { name: "convert_rest_header", func: convert_rest_header },
    Rule { name: "convert_section_labels", func: convert_section_labels },
    Rule { name: "convert_optional_params", func: convert_optional_params },
    Rule { name: "convert_params", func: convert_params },
    Rule { name: "convert_return_codes", func: convert_return_codes },
    Rule { name: "convert_body_param_groups", func: convert_body_param_groups },
    Rule { name: "convert_examples", func: convert_examples },
    Rule { name: "collapse_empty_headings", func: collapse_empty_headings },
    Rule { name: "normalize_headings", func: normalize_headings },
    Rule { name: "convert_error_codes", func: convert_error_codes },
];

/// Runs `text` through every rule of the pipeline.
pub fn rewrite(text: &str) -> String {
    RULES.iter().fold(text.to_string(), |acc, rule| rule.apply(&acc))
}

// ---------------------------------------------------------------------------
//  Regexes
// ---------------------------------------------------------------------------

static HTML_COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

// `@RESTHEADER{/_api/collection/{name},Return information about a collection}`
static REST_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@RESTHEADER\{([\s\w/_{}-]*),([\s\w-]*)\}").unwrap());

// Bare section tags. A trailing `{` marks a parameter-group tag instead.
static SECTION_LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"@REST(DESCRIPTION|URLPARAMETERS|URLPARAMS|QUERYPARAMETERS|QUERYPARAMS|HEADERPARAMETERS|HEADERPARAMS|BODYPARAMETERS|BODYPARAMS|RETURNCODES)\b(\{)?",
    )
    .unwrap()
});

static PARAM_ALIAS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@REST(?:URL|HEADER|QUERY|BODY)PARAM\b").unwrap());

static OPTIONAL_PARAM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@RESTPARAM\{([\s\w-]*),([\s\w_|-]*),\s*(optional)\}").unwrap()
});

static PARAM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@RESTPARAM\{([\s\w-]*),([\s\w_|-]*),\s*(\w+)\}").unwrap());

static RETURN_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@RESTRETURNCODE\{(.*)\}").unwrap());

static BODY_PARAM_GROUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@RESTBODYPARAMS\{(.*)\}").unwrap());

static EMPTY_HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#+\n").unwrap());

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(#{2,})\s+([\s\w()./,:-]+)\n").unwrap());

// `ERROR_NAME,1203,"short text","long description",`
static ERROR_CODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"([\w_]+),([\d-]+),\s*"([\s\w/%()':.,-]+)",\s*"([\s\w(),.:'-]+).*"(,)*"#,
    )
    .unwrap()
});

fn section_label(tag: &str) -> &'static str {
    match tag {
        "URLPARAMETERS" | "URLPARAMS" => "**URL Parameters**\n",
        "QUERYPARAMETERS" | "QUERYPARAMS" => "**Query Parameters**\n",
        "HEADERPARAMETERS" | "HEADERPARAMS" => "**Header Parameters**\n",
        "BODYPARAMETERS" | "BODYPARAMS" => "**Body Parameters**\n",
        "RETURNCODES" => "**Return Codes**\n",
        // DESCRIPTION carries no label of its own.
        _ => "",
    }
}

// ---------------------------------------------------------------------------
//  Rules
// ---------------------------------------------------------------------------

/// Removes `<!-- ... -->` spans.
pub fn strip_html_comments(text: &str) -> String {
    HTML_COMMENT_RE.replace_all(text, "").into_owned()
}

/// Removes the bare `@brief` annotation.
pub fn strip_brief(text: &str) -> String {
    text.replace("@brief", "")
}

/// `@RESTHEADER{path,title}` becomes a level-3 heading followed by the path
/// as inline code.
pub fn convert_rest_header(text: &str) -> String {
    REST_HEADER_RE
        .replace_all(text, "###${2}\n `${1}`")
        .into_owned()
}

/// Replaces the section tags with bold labels, then folds the parameter
/// aliases (`@RESTURLPARAM`, `@RESTHEADERPARAM`, `@RESTQUERYPARAM`,
/// `@RESTBODYPARAM`) into `@RESTPARAM`.
pub fn convert_section_labels(text: &str) -> String {
    let labelled = SECTION_LABEL_RE.replace_all(text, |caps: &Captures| {
        if caps.get(2).is_some() {
            caps[0].to_string()
        } else {
            section_label(&caps[1]).to_string()
        }
    });
    PARAM_ALIAS_RE
        .replace_all(&labelled, "@RESTPARAM")
        .into_owned()
}

/// `@RESTPARAM{name,type,optional}` becomes `* *name* (optional):`.
pub fn convert_optional_params(text: &str) -> String {
    OPTIONAL_PARAM_RE
        .replace_all(text, "* *${1}* (${3}):")
        .into_owned()
}

/// `@RESTPARAM{name,type,required}` becomes `* *name*:`.
pub fn convert_params(text: &str) -> String {
    PARAM_RE.replace_all(text, "* *${1}*:").into_owned()
}

/// `@RESTRETURNCODE{200}` becomes `* *200*:`.
pub fn convert_return_codes(text: &str) -> String {
    RETURN_CODE_RE.replace_all(text, "* *${1}*:").into_owned()
}

/// `@RESTBODYPARAMS{group}` becomes `*(group)*`.
pub fn convert_body_param_groups(text: &str) -> String {
    BODY_PARAM_GROUP_RE
        .replace_all(text, "*(${1})*")
        .into_owned()
}

pub fn convert_examples(text: &str) -> String {
    text.replace("@EXAMPLES", "**Examples**")
}

/// Drops heading markers that are not followed by any text on their line.
pub fn collapse_empty_headings(text: &str) -> String {
    EMPTY_HEADING_RE.replace_all(text, "").into_owned()
}

/// Rewrites `## Title` (two or more levels) as `###Title`.
pub fn normalize_headings(text: &str) -> String {
    HEADING_RE.replace_all(text, "###${2}\n").into_owned()
}

/// Turns an error-code table row into a bold code and summary line followed by
/// the long description.
pub fn convert_error_codes(text: &str) -> String {
    ERROR_CODE_RE
        .replace_all(text, "**${2}** *${3}*:\n${4}\n")
        .into_owned()
}
