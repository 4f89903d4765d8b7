use scraper::{ElementRef, Node};

/// Concatenates every text node under `element` in document order and
/// replaces newlines with spaces.
///
/// Walks the subtree with an explicit stack: children are pushed in reverse
/// so the leftmost one is popped first. Comments and other non-text leaves
/// are skipped.
pub fn flatten_text(element: ElementRef<'_>) -> String {
    let mut text = String::new();
    let mut stack = vec![*element];

    while let Some(node) = stack.pop() {
        match node.value() {
            Node::Text(leaf) => text.push_str(leaf),
            Node::Element(_) => stack.extend(node.children().rev()),
            _ => {}
        }
    }

    text.replace('\n', " ")
}
