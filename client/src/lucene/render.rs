/// Renders an expression node into the Lucene query syntax.
///
/// Implementors only write into the provided buffer so nested nodes can share
/// one allocation; [`Render::render`] is the convenience entry point.
pub trait Render {
    fn render_into(&self, out: &mut String);

    fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}

/// Writes `items` wrapped in `open`/`close`, separated by `separator`.
pub(crate) fn render_group<T: Render>(
    out: &mut String,
    open: char,
    separator: &str,
    items: &[T],
    close: char,
) {
    out.push(open);
    render_joined(out, separator, items);
    out.push(close);
}

/// Writes `items` separated by `separator` with no enclosing brackets.
pub(crate) fn render_joined<T: Render>(out: &mut String, separator: &str, items: &[T]) {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            out.push_str(separator);
        }
        item.render_into(out);
    }
}
