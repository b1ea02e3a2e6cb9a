//! This module is for testing only

use std::cell::RefCell;
use std::rc::Rc;

pub type DropFlag<T> = Rc<RefCell<T>>;

/// Element that bumps a shared counter when a live instance is dropped.
/// The `Default` value is filler and counts for nothing.
#[derive(Default)]
pub struct Tracked {
    pub dropflag: Option<DropFlag<i32>>,
}

impl Tracked {
    pub fn live(flag: &DropFlag<i32>) -> Tracked {
        Tracked { dropflag: Some(flag.clone()) }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        if let Some(flag) = &self.dropflag {
            *flag.borrow_mut() += 1;
        }
    }
}

#[test]
fn dropflag() {
    let flag = DropFlag::new(RefCell::new(0));
    let tracked = Tracked::live(&flag);
    assert_eq!(0, *flag.borrow());
    std::mem::drop(tracked);
    assert_eq!(1, *flag.borrow());
    std::mem::drop(Tracked::default());
    assert_eq!(1, *flag.borrow(), "filler does not count");
}
