//=========================================================================
// Message Bus
//=========================================================================
//
// Per-tick, type-keyed message queues.
//
// Architecture:
//   host → push<M>() → HashMap<TypeId, Vec<M>>
//                              ↓
//   scenes ← read<M>() (shared, any number of readers)
//                              ↓
//   GlobalSystems ──→ clear_all() at the start of the next tick
//
// The host uses it to tell scenes which loads settled this tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::{Any, TypeId};
use std::collections::HashMap;

//=== Message =============================================================

/// Anything that can travel on the bus.
pub trait Message: Send + 'static {}

impl<T: Send + 'static> Message for T {}

//=== Type-Erased Queue ===================================================

trait ErasedQueue: Send {
    fn clear_queue(&mut self);
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<M: Message> ErasedQueue for Vec<M> {
    fn clear_queue(&mut self) {
        self.clear();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

//=== MessageBus ==========================================================

#[derive(Default)]
pub struct MessageBus {
    queues: HashMap<TypeId, Box<dyn ErasedQueue>>,
}

impl MessageBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to the queue for its type.
    pub fn push<M: Message>(&mut self, msg: M) {
        let queue = self
            .queues
            .entry(TypeId::of::<M>())
            .or_insert_with(|| Box::new(Vec::<M>::new()));

        // The entry for TypeId::of::<M>() always holds a Vec<M>
        if let Some(queue) = queue.as_any_mut().downcast_mut::<Vec<M>>() {
            queue.push(msg);
        }
    }

    /// All messages of type `M` pushed since the last clear, oldest first.
    pub fn read<M: Message>(&self) -> &[M] {
        self.queue::<M>().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_messages<M: Message>(&self) -> bool {
        !self.read::<M>().is_empty()
    }

    pub fn count<M: Message>(&self) -> usize {
        self.read::<M>().len()
    }

    /// Empties the queue for `M`, keeping its allocation.
    pub fn clear<M: Message>(&mut self) {
        if let Some(queue) = self.queues.get_mut(&TypeId::of::<M>()) {
            queue.clear_queue();
        }
    }

    /// Empties every queue, keeping allocations.
    pub fn clear_all(&mut self) {
        for queue in self.queues.values_mut() {
            queue.clear_queue();
        }
    }

    fn queue<M: Message>(&self) -> Option<&Vec<M>> {
        self.queues
            .get(&TypeId::of::<M>())
            .and_then(|queue| queue.as_any().downcast_ref::<Vec<M>>())
    }
}

//=========================================================================
// Tests
//=========================================================================
