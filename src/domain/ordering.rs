/// Moves the element at `from` so that it ends up at index `to`.
///
/// Every other element keeps its relative order. Returns `false` (and leaves
/// `items` untouched) when the indices are equal or out of bounds.
pub fn relocate<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

/// Finds the index of the first element matching `predicate`
pub fn position_of<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> Option<usize> {
    items.iter().position(predicate)
}
