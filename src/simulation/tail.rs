//! Bounded trail of recent positions, used only for drawing

use std::collections::VecDeque;

use super::states::NVec2;

#[derive(Debug, Clone, PartialEq)]
pub struct Tail {
    cap: usize,
    points: VecDeque<NVec2>,
}

impl Tail {
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            points: VecDeque::with_capacity(cap + 1),
        }
    }

    /// Append `p`, evicting the oldest point once the cap is exceeded
    pub fn push(&mut self, p: NVec2) {
        if self.cap == 0 {
            return;
        }
        self.points.push_back(p);
        while self.points.len() > self.cap {
            self.points.pop_front();
        }
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &NVec2> + '_ {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_first() {
        let mut tail = Tail::new(50);
        for i in 0..51 {
            tail.push(NVec2::new(i as f64, 0.0));
        }
        assert_eq!(tail.len(), 50);
        assert_eq!(tail.iter().next(), Some(&NVec2::new(1.0, 0.0)));
        assert_eq!(tail.iter().last(), Some(&NVec2::new(50.0, 0.0)));
    }

    #[test]
    fn never_exceeds_cap() {
        let mut tail = Tail::new(3);
        for i in 0..100 {
            tail.push(NVec2::new(0.0, i as f64));
            assert!(tail.len() <= 3);
        }
    }

    #[test]
    fn zero_cap_stays_empty() {
        let mut tail = Tail::new(0);
        tail.push(NVec2::zeros());
        assert!(tail.is_empty());
    }
}
