//! Markup normalization.
//!
//! Parses a page with `scraper` (html5ever underneath) and writes the tree
//! back out one node per line, indented by depth.

use ego_tree::NodeRef;
use scraper::node::Doctype;
use scraper::{ElementRef, Html, Node};

const INDENT: &str = " ";

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Elements whose text is taken literally by the parser and must not be escaped.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "script", "style", "xmp", "iframe", "noembed", "noframes", "noscript", "plaintext",
];

/// Elements whose whitespace is significant; serialized on one line as-is.
const PREFORMATTED_ELEMENTS: &[&str] = &["pre", "textarea"];

/// Parses `markup` and returns it reserialized in indented form.
///
/// The parser repairs the document the way a browser would (missing `<html>`,
/// `<head>` and `<body>` are inserted, unclosed tags are closed), so the
/// output is always a complete document.
pub fn prettify(markup: &str) -> String {
    let document = Html::parse_document(markup);
    prettify_document(&document)
}

/// Serializes an already parsed document in indented form.
///
/// Each tag, text run, comment, and doctype gets its own line, indented one
/// space per nesting level. Whitespace-only text is dropped and other text is
/// trimmed.
pub fn prettify_document(document: &Html) -> String {
    let mut out = String::new();
    write_node(document.tree.root(), 0, &mut out);
    out
}

fn write_node(node: NodeRef<'_, Node>, depth: usize, out: &mut String) {
    match node.value() {
        Node::Document | Node::Fragment => {
            for child in node.children() {
                write_node(child, depth, out);
            }
        }
        Node::Doctype(doctype) => push_line(out, depth, &format_doctype(doctype)),
        Node::Comment(comment) => push_line(out, depth, &format!("<!--{}-->", &**comment)),
        Node::Text(text) => {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                push_line(out, depth, &escape_text(trimmed));
            }
        }
        Node::ProcessingInstruction(pi) => {
            push_line(out, depth, &format!("<?{} {}>", &*pi.target, &*pi.data));
        }
        Node::Element(element) => {
            let name = element.name();

            if PREFORMATTED_ELEMENTS.contains(&name) {
                if let Some(element_ref) = ElementRef::wrap(node) {
                    push_line(out, depth, &element_ref.html());
                }
                return;
            }

            push_line(out, depth, &open_tag(element));
            if VOID_ELEMENTS.contains(&name) {
                return;
            }

            let raw_text = RAW_TEXT_ELEMENTS.contains(&name);
            for child in node.children() {
                match child.value() {
                    Node::Text(text) if raw_text => {
                        let trimmed = text.trim();
                        if !trimmed.is_empty() {
                            push_line(out, depth + 1, trimmed);
                        }
                    }
                    _ => write_node(child, depth + 1, out),
                }
            }
            push_line(out, depth, &format!("</{name}>"));
        }
    }
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(line);
    out.push('\n');
}

fn open_tag(element: &scraper::node::Element) -> String {
    let mut tag = format!("<{}", element.name());
    // Qualified names, so foreign attributes keep their prefix (`xlink:href`)
    for (name, value) in element.attrs.iter() {
        tag.push(' ');
        if let Some(prefix) = &name.prefix {
            tag.push_str(prefix);
            tag.push(':');
        }
        tag.push_str(&name.local);
        tag.push_str("=\"");
        tag.push_str(&escape_attribute(value));
        tag.push('"');
    }
    tag.push('>');
    tag
}

fn format_doctype(doctype: &Doctype) -> String {
    let mut decl = format!("<!DOCTYPE {}", doctype.name());
    if !doctype.public_id().is_empty() {
        decl.push_str(&format!(" PUBLIC \"{}\"", doctype.public_id()));
        if !doctype.system_id().is_empty() {
            decl.push_str(&format!(" \"{}\"", doctype.system_id()));
        }
    } else if !doctype.system_id().is_empty() {
        decl.push_str(&format!(" SYSTEM \"{}\"", doctype.system_id()));
    }
    decl.push('>');
    decl
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\u{a0}' => escaped.push_str("&nbsp;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\u{a0}' => escaped.push_str("&nbsp;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
