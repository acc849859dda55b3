use alloc::vec::{self, Vec};

use crate::{any::Instance, errors::InstantiateErrorKind};

/// Positional arguments of a factory: the resolved instances of its dependencies,
/// in the order the dependency names were declared.
#[derive(Debug)]
pub struct Arguments {
    slots: vec::IntoIter<Instance>,
    position: usize,
}

impl Arguments {
    #[inline]
    #[must_use]
    pub(crate) fn new(slots: Vec<Instance>) -> Self {
        Self {
            slots: slots.into_iter(),
            position: 0,
        }
    }

    /// Position of the next slot to be taken
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Count of slots not taken yet
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.len() == 0
    }

    /// Takes the next positional slot.
    ///
    /// # Errors
    /// Returns [`InstantiateErrorKind::MissingArgument`] if all slots are taken,
    /// which means the factory expects more arguments than dependencies were declared.
    pub fn next_slot(&mut self) -> Result<Instance, InstantiateErrorKind> {
        let position = self.position;
        match self.slots.next() {
            Some(instance) => {
                self.position += 1;
                Ok(instance)
            }
            None => Err(InstantiateErrorKind::MissingArgument { position }),
        }
    }

    /// Takes all remaining slots, leaving `self` empty.
    #[must_use]
    pub fn take_rest(&mut self) -> Self {
        let position = self.position;
        let slots: Vec<_> = self.slots.by_ref().collect();
        self.position += slots.len();

        Self {
            slots: slots.into_iter(),
            position,
        }
    }
}

impl IntoIterator for Arguments {
    type Item = Instance;
    type IntoIter = vec::IntoIter<Instance>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.slots
    }
}
