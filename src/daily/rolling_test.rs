// src/daily/rolling_test.rs

use super::*;

#[test]
fn partial_window_divides_by_full_size() {
    let mut w = RollingWindow::new(3);
    assert_eq!(w.push(3), 1);
    assert_eq!(w.push(3), 2);
    assert_eq!(w.push(3), 3);
}

#[test]
fn trims_from_front() {
    let mut w = RollingWindow::new(3);
    for v in [9, 0, 0] {
        w.push(v);
    }
    assert_eq!(w.mean(), 3);
    assert_eq!(w.push(0), 0);
}

#[test]
fn floors_the_mean() {
    let mut w = RollingWindow::new(7);
    for v in [1, 2, 3, 4, 5, 6, 7] {
        w.push(v);
    }
    assert_eq!(w.mean(), 4);
    assert_eq!(w.push(2), 4);
}

#[test]
fn zero_size_behaves_as_one() {
    let mut w = RollingWindow::new(0);
    assert_eq!(w.push(5), 5);
    assert_eq!(w.push(2), 2);
}
