use insta::assert_snapshot;
use markdown_sitegen_engine::{
    BlockType, ConvertError, HtmlNode, InlineNode, block_to_block_type, extract_title,
    markdown_to_blocks, markdown_to_html_node, render, text_to_spans,
};
use pretty_assertions::assert_eq;

const PAGE: &str = "# Tolkien Fan Club

![JRR Tolkien sitting](/images/tolkien.png)

Here's the deal, **I like Tolkien**.

> \"I am in fact a Hobbit in all but size.\"
>
> -- J.R.R. Tolkien

## Blog posts

- [Why Glorfindel is More Impressive than Legolas](/blog/glorfindel)
- [Why Tom Bombadil Was a Mistake](/blog/tom)

## Reasons I like Tolkien

1. _The Silmarillion_ exists
2. His use of `invented languages`
3. Lothlórien is my favorite place

```
func main() {
    fmt.Println(\"_not italic_\")
}
```
";

#[test]
fn full_page() {
    assert_eq!(extract_title(PAGE).unwrap(), "Tolkien Fan Club");
    assert_eq!(
        render(PAGE).unwrap(),
        concat!(
            "<div>",
            "<h1>Tolkien Fan Club</h1>",
            r#"<p><img src="/images/tolkien.png" alt="JRR Tolkien sitting"></img></p>"#,
            "<p>Here's the deal, <b>I like Tolkien</b>.</p>",
            r#"<blockquote>"I am in fact a Hobbit in all but size."  -- J.R.R. Tolkien</blockquote>"#,
            "<h2>Blog posts</h2>",
            "<ul>",
            r#"<li><a href="/blog/glorfindel">Why Glorfindel is More Impressive than Legolas</a></li>"#,
            r#"<li><a href="/blog/tom">Why Tom Bombadil Was a Mistake</a></li>"#,
            "</ul>",
            "<h2>Reasons I like Tolkien</h2>",
            "<ol>",
            "<li><i>The Silmarillion</i> exists</li>",
            "<li>His use of <code>invented languages</code></li>",
            "<li>Lothlórien is my favorite place</li>",
            "</ol>",
            "<pre><code>func main() {\n    fmt.Println(\"_not italic_\")\n}\n</code></pre>",
            "</div>",
        )
    );
}

#[test]
fn root_has_one_child_per_block() {
    let root = markdown_to_html_node(PAGE).unwrap();
    assert_eq!(root.tag(), Some("div"));
    assert_eq!(root.children().len(), markdown_to_blocks(PAGE).len());
}

#[test]
fn bold_spans() {
    assert_eq!(
        text_to_spans("This is text with a **bolded** word").unwrap(),
        vec![
            InlineNode::Text("This is text with a ".into()),
            InlineNode::Bold("bolded".into()),
            InlineNode::Text(" word".into()),
        ]
    );
}

#[test]
fn lone_image_span() {
    assert_eq!(
        text_to_spans("![image](https://x/y.png)").unwrap(),
        vec![InlineNode::Image {
            alt: "image".into(),
            src: "https://x/y.png".into(),
        }]
    );
}

#[test]
fn odd_bold_delimiters_fail() {
    for text in ["**", "a ** b ** c **", "**x** **"] {
        assert!(
            matches!(
                text_to_spans(text),
                Err(ConvertError::MalformedInline { delimiter: "**", .. })
            ),
            "{text:?} should be malformed"
        );
    }
}

#[test]
fn broken_numbering_is_paragraph() {
    assert_eq!(block_to_block_type("1. a\n2. b\n- c"), BlockType::Paragraph);
}

#[test]
fn quote_block() {
    assert_snapshot!(render("> a\n> b").unwrap(), @"<div><blockquote>a b</blockquote></div>");
}

#[test]
fn title_document() {
    let md = "# Title\n\nbody";
    assert_eq!(extract_title(md).unwrap(), "Title");
    assert_snapshot!(render(md).unwrap(), @"<div><h1>Title</h1><p>body</p></div>");
}

#[test]
fn no_title() {
    assert_eq!(extract_title("no heading here"), Err(ConvertError::MissingTitle));
}

#[test]
fn long_ordered_list_keeps_item_text() {
    let md = (1..=11)
        .map(|n| format!("{n}. entry"))
        .collect::<Vec<_>>()
        .join("\n");
    let html = render(&md).unwrap();
    assert_eq!(html.matches("<li>entry</li>").count(), 11);
}

#[test]
fn hand_built_invalid_tree_fails_to_render() {
    let root = HtmlNode::Parent {
        tag: Some("div".into()),
        children: None,
        attributes: None,
    };
    assert!(root.render().is_err());
}

#[test]
fn concurrent_conversions_are_independent() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || render(&format!("# Page {i}\n\nbody {i}")).unwrap())
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(
            handle.join().unwrap(),
            format!("<div><h1>Page {i}</h1><p>body {i}</p></div>")
        );
    }
}
