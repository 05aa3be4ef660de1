/// Bounding box over grid cells, `r0..=r1` by `c0..=c1`.
/// The default value is the empty box.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rect {
    pub r0: i32,
    pub r1: i32,
    pub c0: i32,
    pub c1: i32,
}
impl Default for Rect {
    fn default() -> Self {
        Rect { r0: i32::MAX, r1: i32::MIN, c0: i32::MAX, c1: i32::MIN }
    }
}
impl Rect {
    pub fn empty() -> Self {
        Self::default()
    }
    pub fn is_empty(&self) -> bool {
        self.r0 > self.r1 || self.c0 > self.c1
    }
    pub fn add(self, r: i32, c: i32) -> Self {
        Rect { r0: self.r0.min(r), r1: self.r1.max(r), c0: self.c0.min(c), c1: self.c1.max(c) }
    }
    /// Does the box cross the line between rows `r` and `r + 1`?
    pub fn intersects_horizontal(&self, r: i32) -> bool {
        self.r0 <= r && r < self.r1
    }
    /// Does the box cross the line between columns `c` and `c + 1`?
    pub fn intersects_vertical(&self, c: i32) -> bool {
        self.c0 <= c && c < self.c1
    }
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.r0 > other.r1 || other.r0 > self.r1 || self.c0 > other.c1 || other.c0 > self.c1)
    }
}

#[test]
fn test_rect_add() {
    let r = Rect::empty().add(2, 3).add(0, 5).add(2, 3);
    assert_eq!(r, Rect { r0: 0, r1: 2, c0: 3, c1: 5 });
    assert_eq!(Rect::empty().add(0, 5).add(2, 3), r);
    assert!(Rect::empty().is_empty());
    assert!(!r.is_empty());
}
#[test]
fn test_rect_single_point() {
    let r = Rect::empty().add(3, 4);
    assert_eq!(r, Rect { r0: 3, r1: 3, c0: 4, c1: 4 });
    assert!(!r.intersects_horizontal(3));
    assert!(!r.intersects_vertical(3));
    assert!(r.overlaps(&r));
}
#[test]
fn test_rect_lines() {
    let r = Rect::empty().add(1, 2).add(3, 2);
    assert!(!r.intersects_horizontal(0));
    assert!(r.intersects_horizontal(1));
    assert!(r.intersects_horizontal(2));
    assert!(!r.intersects_horizontal(3));
    assert!(!r.intersects_vertical(2));
    assert!(!r.intersects_vertical(1));
    assert!(!Rect::empty().intersects_horizontal(0));
}
#[test]
fn test_rect_overlap() {
    let a = Rect::empty().add(0, 0).add(1, 1);
    assert!(a.overlaps(&Rect::empty().add(1, 1).add(2, 2)));
    assert!(!a.overlaps(&Rect::empty().add(2, 0)));
    assert!(!a.overlaps(&Rect::empty().add(0, 2)));
    assert!(!a.overlaps(&Rect::empty()));
    assert!(!Rect::empty().overlaps(&a));
}
