/// Open-addressing hash table keyed by 16-bit code point, probing linearly
/// forward (wrapping) on collision.
///
/// The table is allocated with headroom over the expected entry count and
/// every probe sequence is bounded by the slot count, so a lookup for an
/// absent key always terminates: at an empty slot, or after one full cycle
/// through an unexpectedly full table.
#[derive(Debug)]
pub(crate) struct ProbeMap<V> {
    slots: Vec<Option<(u16, V)>>,
    len: usize,
}

impl<V> ProbeMap<V> {
    /// Table sized for `entries` insertions at a load factor of at most 3/4.
    pub fn with_capacity(entries: usize) -> Self {
        let len = entries + entries / 3 + 1;

        let mut slots = Vec::with_capacity(len);
        slots.resize_with(len, || None);

        Self { slots, len: 0 }
    }

    /// Number of distinct keys inserted.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn get(&self, key: u16) -> Option<&V> {
        let len = self.slots.len();
        let mut index = key as usize % len;

        for _ in 0..len {
            match &self.slots[index] {
                Some((k, value)) if *k == key => return Some(value),
                Some(..) => index = (index + 1) % len,
                None => return None,
            }
        }

        None
    }

    /// Inserting an already-present key replaces its value; a colliding slot
    /// holding a different key is never overwritten. If a full probe cycle
    /// finds no free slot the table is grown and rehashed.
    pub fn insert(&mut self, key: u16, value: V) {
        let len = self.slots.len();
        let mut index = key as usize % len;

        for _ in 0..len {
            match &self.slots[index] {
                Some((k, ..)) if *k != key => index = (index + 1) % len,
                Some(..) => {
                    self.slots[index] = Some((key, value));
                    return;
                }
                None => {
                    self.slots[index] = Some((key, value));
                    self.len += 1;
                    return;
                }
            }
        }

        self.grow();
        self.insert(key, value);
    }

    fn grow(&mut self) {
        let mut bigger = ProbeMap::with_capacity(self.slots.len() * 2);

        for slot in self.slots.drain(..).flatten() {
            bigger.insert(slot.0, slot.1);
        }

        self.slots = bigger.slots;
    }
}
