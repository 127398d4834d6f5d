//! Text helpers for pane editing that egui's `TextEdit` does not cover.

fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

/// Replaces the chars in `start..end` with `insert`, clamping both ends to
/// the text.
///
/// # Returns
/// Char index just past the inserted text.
pub(super) fn replace_char_range(text: &mut String, start: usize, end: usize, insert: &str) -> usize {
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    let len = text.chars().count();
    let start = start.min(len);
    let end = end.min(len);
    let start_byte = byte_offset(text, start);
    let end_byte = byte_offset(text, end);
    text.replace_range(start_byte..end_byte, insert);
    start + insert.chars().count()
}

/// Prefixes `unit` to every line the selection `anchor..head` touches.
///
/// A selection ending at the start of a line leaves that line alone. A
/// selection starting at a line start grows to cover the new indent.
///
/// # Returns
/// The shifted `(anchor, head)` char indices.
pub(super) fn indent_lines(text: &mut String, anchor: usize, head: usize, unit: &str) -> (usize, usize) {
    let len = text.chars().count();
    let anchor = anchor.min(len);
    let head = head.min(len);
    let (start, end) = if anchor <= head { (anchor, head) } else { (head, anchor) };

    let line_starts: Vec<usize> = std::iter::once(0)
        .chain(
            text.chars()
                .enumerate()
                .filter(|(_, ch)| *ch == '\n')
                .map(|(index, _)| index + 1),
        )
        .collect();
    let line_of = |pos: usize| line_starts.iter().rposition(|&line| line <= pos).unwrap_or(0);
    let first = line_of(start);
    let mut last = line_of(end);
    if end > start && last > first && line_starts[last] == end {
        last -= 1;
    }
    let targets = &line_starts[first..=last];

    for &line in targets.iter().rev() {
        let at = byte_offset(text, line);
        text.insert_str(at, unit);
    }

    let unit_len = unit.chars().count();
    let shift = |pos: usize, is_start: bool| {
        let before = targets
            .iter()
            .filter(|&&line| line < pos || (line == pos && !is_start))
            .count();
        pos + unit_len * before
    };
    let new_start = shift(start, true);
    let new_end = shift(end, end == start);
    if anchor <= head {
        (new_start, new_end)
    } else {
        (new_end, new_start)
    }
}
