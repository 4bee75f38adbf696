use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return a `Rect` of the given size centered within `area`, shrunk to fit if
/// `area` is too small
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [rect] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(rect);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rect::new(0, 0, 26, 7), Size::new(26, 7), Rect::new(0, 0, 26, 7))]
    #[case(Rect::new(0, 0, 30, 9), Size::new(26, 7), Rect::new(2, 1, 26, 7))]
    #[case(Rect::new(5, 3, 30, 9), Size::new(26, 7), Rect::new(7, 4, 26, 7))]
    #[case(Rect::new(0, 0, 80, 24), Size::new(66, 22), Rect::new(7, 1, 66, 22))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] r: Rect) {
        assert_eq!(center_rect(area, size), r);
    }
}
