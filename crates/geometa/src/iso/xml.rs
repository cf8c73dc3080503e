//! Namespace constants and small navigation helpers over `roxmltree` nodes.

use roxmltree::Node;

/// ISO 19139 metadata namespace.
pub const GMD: &str = "http://www.isotc211.org/2005/gmd";
/// ISO 19139 common objects namespace.
pub const GCO: &str = "http://www.isotc211.org/2005/gco";
/// ISO 19115-2 imagery extension namespace.
pub const GMI: &str = "http://www.isotc211.org/2005/gmi";

/// A namespace-qualified element step, e.g. `(GMD, "language")`.
pub type Step<'s> = (&'s str, &'s str);

/// First element child of `node` with the given qualified name.
pub fn child<'a, 'input>(node: Node<'a, 'input>, step: Step<'_>) -> Option<Node<'a, 'input>> {
    children(node, step).next()
}

/// All element children of `node` with the given qualified name.
pub fn children<'a, 'input, 's>(
    node: Node<'a, 'input>,
    step: Step<'s>,
) -> impl Iterator<Item = Node<'a, 'input>> + 's
where
    'a: 's,
    'input: 's,
{
    node.children()
        .filter(move |n| n.is_element() && n.has_tag_name(step))
}

/// Follow a chain of child steps from `node`, taking the first match each time.
pub fn find<'a, 'input>(node: Node<'a, 'input>, path: &[Step<'_>]) -> Option<Node<'a, 'input>> {
    path.iter().try_fold(node, |current, &step| child(current, step))
}

/// Trimmed text content, `None` when absent or blank.
pub fn text(node: Node<'_, '_>) -> Option<String> {
    clean(node.text())
}

/// Trimmed attribute value (no namespace), `None` when absent or blank.
pub fn attribute(node: Node<'_, '_>, name: &str) -> Option<String> {
    clean(node.attribute(name))
}

/// Text at the end of `path`.
pub fn find_text(node: Node<'_, '_>, path: &[Step<'_>]) -> Option<String> {
    find(node, path).and_then(text)
}

/// ISO code list value at the end of `path`.
pub fn find_code(node: Node<'_, '_>, path: &[Step<'_>]) -> Option<String> {
    find(node, path).and_then(|n| attribute(n, "codeListValue"))
}

fn clean(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
