/// How a statement finished. `Break` is a control transfer, not an error;
/// it unwinds until the nearest enclosing `while` absorbs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Next,
    Break,
}
