use crate::errors::ParseError;

// @module: TTML document model and parser

/// A parsed TTML document, reduced to the shape transcript extraction
/// depends on: an ordered sequence of paragraphs.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Paragraphs of the first div of the body, in document order
    pub paragraphs: Vec<Paragraph>,
}

/// A timed text unit, composed of spans
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    // @field: Begin time in seconds, when the paragraph carries one
    pub begin: Option<f64>,

    // @field: Direct span children, in document order
    pub spans: Vec<Span>,
}

/// A text-bearing or container node nested within a paragraph.
///
/// Spans nest to arbitrary depth. A container's own character data is
/// never read; only leaf fragments contribute transcript text.
#[derive(Debug, Clone, PartialEq)]
pub enum Span {
    /// Span holding further nested spans
    Container(Vec<Span>),
    /// Span holding a text fragment
    Leaf(String),
}

/// Parse TTML content into a [`Document`].
///
/// The expected shape mirrors the timed-text grammar: a `tt` root with a
/// `body` containing a `div` containing `p` elements. Anything else is a
/// hard [`ParseError::Shape`] failure; no recovery is attempted. Only the
/// first div of the body is read. Elements are matched by local name so
/// namespaced documents (`xmlns="http://www.w3.org/ns/ttml"`) parse the
/// same as unqualified ones.
pub fn parse(content: &str) -> Result<Document, ParseError> {
    let xml = roxmltree::Document::parse(content)?;

    let root = xml.root_element();
    if root.tag_name().name() != "tt" {
        return Err(ParseError::Shape(format!(
            "expected tt root element, found {}",
            root.tag_name().name()
        )));
    }

    let body = first_child_element(root, "body")
        .ok_or_else(|| ParseError::Shape("missing body element".to_string()))?;

    let div = first_child_element(body, "div")
        .ok_or_else(|| ParseError::Shape("missing div element".to_string()))?;

    let paragraphs: Vec<Paragraph> = div
        .children()
        .filter(|child| child.is_element() && child.tag_name().name() == "p")
        .map(parse_paragraph)
        .collect();

    if paragraphs.is_empty() {
        return Err(ParseError::Shape("div contains no paragraph elements".to_string()));
    }

    Ok(Document { paragraphs })
}

// @returns: First child element with the given local name
fn first_child_element<'a, 'input>(
    node: roxmltree::Node<'a, 'input>,
    name: &str,
) -> Option<roxmltree::Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == name)
}

fn parse_paragraph(node: roxmltree::Node) -> Paragraph {
    // A non-numeric begin attribute is treated the same as an absent one
    let begin = node.attribute("begin").and_then(|value| value.parse::<f64>().ok());

    let spans = node
        .children()
        .filter(|child| child.is_element() && child.tag_name().name() == "span")
        .map(parse_span)
        .collect();

    Paragraph { begin, spans }
}

fn parse_span(node: roxmltree::Node) -> Span {
    let nested: Vec<Span> = node
        .children()
        .filter(|child| child.is_element() && child.tag_name().name() == "span")
        .map(parse_span)
        .collect();

    if !nested.is_empty() {
        return Span::Container(nested);
    }

    let mut text = String::new();
    for child in node.children() {
        if child.is_text() {
            if let Some(fragment) = child.text() {
                text.push_str(fragment);
            }
        }
    }

    Span::Leaf(text)
}
