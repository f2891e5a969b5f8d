// tween/target.rs
//
// What a tween writes to. Plain vectors, borrowed objects, shared handles and
// scene entities all qualify through `Positioned`.

use std::cell::RefCell;
use std::rc::Rc;
use glam::Vec3;

/// Anything with a settable world position.
///
/// This is the only capability a tween needs from the object it moves. The
/// tween never owns the object; it holds whatever handle the caller passes
/// (`&mut T`, `Rc<RefCell<T>>`, ...) and the caller must cancel the tween
/// before invalidating what that handle points at.
pub trait Positioned {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, pos: Vec3);
}

impl Positioned for Vec3 {
    fn position(&self) -> Vec3 {
        *self
    }

    fn set_position(&mut self, pos: Vec3) {
        *self = pos;
    }
}

impl<T: Positioned + ?Sized> Positioned for &mut T {
    fn position(&self) -> Vec3 {
        (**self).position()
    }

    fn set_position(&mut self, pos: Vec3) {
        (**self).set_position(pos);
    }
}

/// Shared handle, for objects the host keeps mutating between frames.
impl<T: Positioned + ?Sized> Positioned for Rc<RefCell<T>> {
    fn position(&self) -> Vec3 {
        self.borrow().position()
    }

    fn set_position(&mut self, pos: Vec3) {
        self.borrow_mut().set_position(pos);
    }
}
