/// Watches an iterative numerical routine and may steer it.
///
/// The routine hands each progress event `E` to the observer. Returning
/// `Some(action)` asks the routine to act on it (for the quadrature engine,
/// stop refining). Returning `None` leaves the routine untouched.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that never acts.
pub trait Observer<E, A> {
    /// Inspects one event.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_observer_sees_every_event() {
        let mut seen = Vec::new();
        let mut observer = |event: &u32| {
            seen.push(*event);
            (*event >= 2).then_some("stop")
        };

        assert_eq!(observer.observe(&1), None);
        assert_eq!(observer.observe(&2), Some("stop"));
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn unit_observer_never_acts() {
        let mut observer = ();
        assert_eq!(Observer::<u32, ()>::observe(&mut observer, &7), None);
    }
}
