//! Document-level tests for the parsing module.
//!
//! Each test converts a whole document and checks the output invariants
//! before looking at the rendered HTML.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    error::ConvertError,
    parsing::{extract_title, markdown_to_html_node, render},
};

fn convert(md: &str) -> String {
    let root = markdown_to_html_node(md).unwrap();
    invariants::check(md, &root);
    root.render().unwrap()
}

#[test]
fn paragraph() {
    let md = "
This is **bolded** paragraph
text in a p
tag here

";
    assert_eq!(
        convert(md),
        "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p></div>"
    );
}

#[test]
fn paragraphs() {
    let md = "
This is **bolded** paragraph
text in a p
tag here

This is another paragraph with _italic_ text and `code` here

";
    assert_eq!(
        convert(md),
        "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
    );
}

#[test]
fn lists() {
    let md = "
- This is a list
- with items
- and _more_ items

1. This is an `ordered` list
2. with items
3. and more items

";
    assert_eq!(
        convert(md),
        "<div><ul><li>This is a list</li><li>with items</li><li>and <i>more</i> items</li></ul><ol><li>This is an <code>ordered</code> list</li><li>with items</li><li>and more items</li></ol></div>"
    );
}

#[test]
fn headings() {
    let md = "
# this is an h1

this is paragraph text

## this is an h2
";
    assert_eq!(
        convert(md),
        "<div><h1>this is an h1</h1><p>this is paragraph text</p><h2>this is an h2</h2></div>"
    );
}

#[test]
fn blockquote() {
    let md = "
> This is a
> blockquote block

this is paragraph text

";
    assert_eq!(
        convert(md),
        "<div><blockquote>This is a blockquote block</blockquote><p>this is paragraph text</p></div>"
    );
}

#[test]
fn code() {
    let md = "
```
This is text that _should_ remain
the **same** even with inline stuff
```
";
    assert_eq!(
        convert(md),
        "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
    );
}

#[test]
fn title_and_body() {
    let md = "# Title\n\nbody";
    assert_eq!(extract_title(md).unwrap(), "Title");
    assert_eq!(render(md).unwrap(), "<div><h1>Title</h1><p>body</p></div>");
}

#[test]
fn empty_document_renders_empty_root() {
    assert_eq!(convert(""), "<div></div>");
    assert_eq!(convert("\n\n\n\n"), "<div></div>");
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
#[case(5)]
#[case(6)]
fn heading_level_maps_to_tag(#[case] level: usize) {
    let md = format!("{} heading", "#".repeat(level));
    assert_eq!(convert(&md), format!("<div><h{level}>heading</h{level}></div>"));
}

#[test]
fn blank_line_runs_do_not_change_output() {
    let tight = "one\n\ntwo\n\n- three";
    let loose = "one\n\n\n\ntwo\n\n\n\n\n\n- three";
    assert_eq!(convert(tight), convert(loose));
}

#[test]
fn one_child_per_block_for_mixed_document() {
    let md = "# T\n\npara\n\n> q\n\n- a\n- b\n\n1. x\n\n```\nc\n```";
    let root = markdown_to_html_node(md).unwrap();
    invariants::check(md, &root);
    let tags: Vec<_> = root.children().iter().map(|c| c.tag().unwrap()).collect();
    assert_eq!(tags, vec!["h1", "p", "blockquote", "ul", "ol", "pre"]);
}

#[test]
fn malformed_inline_fails_whole_document() {
    let md = "# Fine\n\nthis **is not closed\n\nfine again";
    assert!(matches!(
        render(md),
        Err(ConvertError::MalformedInline { delimiter: "**", .. })
    ));
}

#[test]
fn degraded_list_renders_as_paragraph() {
    assert_eq!(convert("1. a\n2. b\n- c"), "<div><p>1. a 2. b - c</p></div>");
}

#[test]
fn missing_title() {
    assert_eq!(
        extract_title("just text\n\n## sub"),
        Err(ConvertError::MissingTitle)
    );
}
