/// A value that can produce a fully independent copy of itself.
///
/// The copy returned by [`deep_copy`] must share no mutable substructure with
/// the original, so that mutating either one can never be observed through
/// the other. [`Snapshot`], [`Subject`], and [`History`] rely on this to keep
/// saved state isolated from the live value.
///
/// There is intentionally no blanket implementation over [`Clone`]: a type
/// like `Rc<RefCell<T>>` is `Clone` but its clones alias the same cell.
/// Types opt in explicitly, usually by delegating to a derived `Clone` once
/// every field is known to own its data.
///
/// ```rust
/// use memento_core::StateHolder;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Cursor {
///     line: usize,
///     column: usize,
/// }
///
/// impl StateHolder for Cursor {
///     fn deep_copy(&self) -> Self {
///         self.clone()
///     }
/// }
///
/// let cursor = Cursor { line: 4, column: 2 };
/// assert_eq!(cursor.deep_copy(), cursor);
/// ```
///
/// [`deep_copy`]: StateHolder::deep_copy
/// [`Snapshot`]: crate::Snapshot
/// [`Subject`]: crate::Subject
/// [`History`]: crate::History
pub trait StateHolder: Sized {
    /// Returns a copy of `self` that shares no mutable state with it.
    #[must_use]
    fn deep_copy(&self) -> Self;
}

macro_rules! impl_state_holder_for_copy {
    ($($ty:ty),* $(,)?) => {
        $(
            impl StateHolder for $ty {
                fn deep_copy(&self) -> Self {
                    *self
                }
            }
        )*
    };
}

impl_state_holder_for_copy!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl StateHolder for String {
    fn deep_copy(&self) -> Self {
        self.clone()
    }
}

impl<T: StateHolder> StateHolder for Vec<T> {
    fn deep_copy(&self) -> Self {
        self.iter().map(StateHolder::deep_copy).collect()
    }
}

impl<T: StateHolder> StateHolder for Option<T> {
    fn deep_copy(&self) -> Self {
        self.as_ref().map(StateHolder::deep_copy)
    }
}

impl<T: StateHolder> StateHolder for Box<T> {
    fn deep_copy(&self) -> Self {
        Box::new(self.as_ref().deep_copy())
    }
}

impl<A: StateHolder, B: StateHolder> StateHolder for (A, B) {
    fn deep_copy(&self) -> Self {
        (self.0.deep_copy(), self.1.deep_copy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_copy_by_value() {
        assert_eq!(42_i32.deep_copy(), 42);
        assert_eq!('x'.deep_copy(), 'x');
        assert!(true.deep_copy());
    }

    #[test]
    fn string_copy_is_independent() {
        let original = String::from("left");
        let mut copy = original.deep_copy();
        copy.push_str(" and right");

        assert_eq!(original, "left");
        assert_eq!(copy, "left and right");
    }

    #[test]
    fn nested_collections_copy_every_level() {
        let original = vec![
            (1_u8, Some(Box::new(String::from("a")))),
            (2_u8, None),
        ];
        let mut copy = original.deep_copy();

        if let Some(name) = copy[0].1.as_mut() {
            name.push('!');
        }
        copy[1].1 = Some(Box::new(String::from("b")));

        assert_eq!(original[0].1.as_deref().map(String::as_str), Some("a"));
        assert_eq!(original[1].1, None);
        assert_eq!(copy[0].1.as_deref().map(String::as_str), Some("a!"));
    }
}
