use super::{StateVariable, StorageKind};
use crate::StrError;
use std::collections::BTreeMap;
use std::ops::AddAssign;

/// Wraps the backing memory of a [History]
#[derive(Debug)]
enum Storage<'a> {
    /// Buffer allocated, grown, and freed by the history itself
    Owned(Vec<f64>),

    /// Borrowed slice of a buffer owned by the caller (e.g., the solver's
    /// global state array); the history can never grow it
    External(&'a mut [f64]),
}

/// Implements the store of named internal state variables at a material point
///
/// Each model component declares the variables it needs by name during a setup
/// pass; the history packs them into one contiguous scalar buffer and records
/// name → offset and name → [StorageKind] maps. During an evaluation, typed
/// zero-copy views are retrieved by name, and buffer-wide operations
/// (checkpointing, sub-step scaling, accumulation) act on the whole state
/// without knowledge of the layout.
///
/// Declaration and evaluation are disjoint phases: all [History::declare]
/// calls must complete before views are taken, because growing the buffer may
/// reallocate it (the borrow checker enforces that no stale view survives).
///
/// The history either owns its buffer or aliases caller-supplied memory; in
/// the latter case the lifetime parameter ties the history to the caller's
/// buffer. A single history must not be shared mutably across threads; the
/// intended pattern is one history per material point per thread.
///
/// # Examples
///
/// ```
/// use matpoint::{History, StrError, Symmetric};
///
/// fn main() -> Result<(), StrError> {
///     let mut history = History::new();
///     history.declare::<Symmetric>("back_stress")?;
///     history.declare::<f64>("damage")?;
///     assert_eq!(history.size(), 7);
///
///     *history.get_mut::<f64>("damage")? = 0.1;
///     history.get_mut::<Symmetric>("back_stress")?.set(0, 1, 2.0);
///
///     let checkpoint = history.deepcopy();
///     history.scalar_multiply(2.0);
///     assert_eq!(*history.get::<f64>("damage")?, 0.2);
///     assert_eq!(*checkpoint.get::<f64>("damage")?, 0.1);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct History<'a> {
    /// Total number of scalars occupied by the declared variables
    size: usize,

    /// Backing memory (owned or external)
    storage: Storage<'a>,

    /// Maps a variable name to its starting index in the buffer
    offsets: BTreeMap<String, usize>,

    /// Maps a variable name to the kind it was declared with
    kinds: BTreeMap<String, StorageKind>,
}

impl<'a> History<'a> {
    /// Allocates a new empty history owning its (zero-sized) buffer
    pub fn new() -> Self {
        History {
            size: 0,
            storage: Storage::Owned(Vec::new()),
            offsets: BTreeMap::new(),
            kinds: BTreeMap::new(),
        }
    }

    /// Returns the total number of scalars occupied by the declared variables
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if no variable has been declared
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Returns true if the history owns its buffer (vs aliasing external memory)
    pub fn owns_storage(&self) -> bool {
        matches!(self.storage, Storage::Owned(_))
    }

    /// Returns an access to the flat scalar buffer
    pub fn as_slice(&self) -> &[f64] {
        match &self.storage {
            Storage::Owned(data) => &data[..],
            Storage::External(data) => &data[..self.size],
        }
    }

    /// Returns a mutable access to the flat scalar buffer
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        let size = self.size;
        match &mut self.storage {
            Storage::Owned(data) => &mut data[..],
            Storage::External(data) => &mut data[..size],
        }
    }

    /// Declares a new named state variable of type T
    ///
    /// Grows the owned buffer by `T::FOOTPRINT` scalars (zero-filled) and
    /// records the offset and kind of the new slot. A failed call leaves the
    /// history unmodified.
    pub fn declare<T: StateVariable>(&mut self, name: &str) -> Result<(), StrError> {
        if self.offsets.contains_key(name) {
            return Err("state variable is already present in the history");
        }
        let offset = self.size;
        self.resize(T::FOOTPRINT)?;
        self.offsets.insert(name.to_string(), offset);
        self.kinds.insert(name.to_string(), T::KIND);
        Ok(())
    }

    /// Retrieves a read-only typed view over a named state variable
    ///
    /// For scalars, the view is a plain `&f64`.
    pub fn get<T: StateVariable>(&self, name: &str) -> Result<T::Ref<'_>, StrError> {
        let offset = self.locate::<T>(name)?;
        Ok(T::view(&self.as_slice()[offset..offset + T::FOOTPRINT]))
    }

    /// Retrieves a mutable typed view over a named state variable
    ///
    /// Writes through the view land directly in the buffer (zero-copy). For
    /// scalars, the view is a plain `&mut f64`.
    pub fn get_mut<T: StateVariable>(&mut self, name: &str) -> Result<T::Mut<'_>, StrError> {
        let offset = self.locate::<T>(name)?;
        Ok(T::view_mut(&mut self.as_mut_slice()[offset..offset + T::FOOTPRINT]))
    }

    /// Returns the buffer offset of a named state variable
    pub fn offset_of(&self, name: &str) -> Result<usize, StrError> {
        match self.offsets.get(name) {
            Some(offset) => Ok(*offset),
            None => Err("state variable is not present in the history"),
        }
    }

    /// Returns the storage kind a named state variable was declared with
    pub fn kind_of(&self, name: &str) -> Result<StorageKind, StrError> {
        match self.kinds.get(name) {
            Some(kind) => Ok(*kind),
            None => Err("state variable is not present in the history"),
        }
    }

    /// Returns true if a variable with the given name has been declared
    pub fn contains(&self, name: &str) -> bool {
        self.offsets.contains_key(name)
    }

    /// Returns the declared variable names in a stable (lexicographic) order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.offsets.keys().map(|name| name.as_str())
    }

    /// Switches the history to non-owning mode over a caller-supplied buffer
    ///
    /// The name/offset/kind maps are unchanged; only the backing memory
    /// reference changes. The buffer must hold at least [History::size]
    /// scalars. An owned buffer, if any, is dropped.
    pub fn set_external(&mut self, data: &'a mut [f64]) -> Result<(), StrError> {
        if data.len() < self.size {
            return Err("external buffer is too small for the history layout");
        }
        self.storage = Storage::External(data);
        Ok(())
    }

    /// Creates a non-owning history over a caller-supplied buffer, sharing this layout
    ///
    /// The new history duplicates the name/offset/kind maps and reads/writes
    /// the given buffer in place. Used to replay one layout against many
    /// per-point slices of a larger state array.
    pub fn view_over<'b>(&self, data: &'b mut [f64]) -> Result<History<'b>, StrError> {
        if data.len() < self.size {
            return Err("external buffer is too small for the history layout");
        }
        Ok(History {
            size: self.size,
            storage: Storage::External(data),
            offsets: self.offsets.clone(),
            kinds: self.kinds.clone(),
        })
    }

    /// Value-copies `size` scalars from an external buffer into this history
    ///
    /// The name/offset/kind maps are unchanged. Works in both ownership modes.
    pub fn copy_data(&mut self, source: &[f64]) -> Result<(), StrError> {
        if source.len() < self.size {
            return Err("source buffer is too small for the history layout");
        }
        let size = self.size;
        self.as_mut_slice().copy_from_slice(&source[..size]);
        Ok(())
    }

    /// Returns an independently owned duplicate (fresh buffer, copied contents and maps)
    pub fn deepcopy(&self) -> History<'static> {
        History {
            size: self.size,
            storage: Storage::Owned(self.as_slice().to_vec()),
            offsets: self.offsets.clone(),
            kinds: self.kinds.clone(),
        }
    }

    /// Returns an owned history with the same layout and a zeroed buffer
    ///
    /// Rate and derivative producers use this to emit results congruent with
    /// an input history without copying its values.
    pub fn blank_copy(&self) -> History<'static> {
        History {
            size: self.size,
            storage: Storage::Owned(vec![0.0; self.size]),
            offsets: self.offsets.clone(),
            kinds: self.kinds.clone(),
        }
    }

    /// Grows the owned buffer by the given number of scalars (zero-filled)
    ///
    /// Existing contents keep their offsets. Fails in non-owning mode, since
    /// foreign memory cannot be grown.
    fn resize(&mut self, increment: usize) -> Result<(), StrError> {
        match &mut self.storage {
            Storage::Owned(data) => {
                self.size += increment;
                data.resize(self.size, 0.0);
                Ok(())
            }
            Storage::External(_) => Err("cannot grow a history that views external storage"),
        }
    }

    /// Multiplies every scalar in the buffer by the given factor, in place
    ///
    /// Valid across slot kinds because all supported value types store plain
    /// scalar components (e.g., uniform sub-step scaling of a whole state).
    pub fn scalar_multiply(&mut self, factor: f64) {
        for value in self.as_mut_slice() {
            *value *= factor;
        }
    }

    /// Returns true if both histories declare the identical layout
    ///
    /// Identical layout means the same buffer size and the same name → offset
    /// and name → kind maps.
    pub fn congruent(&self, other: &History) -> bool {
        self.size == other.size && self.offsets == other.offsets && self.kinds == other.kinds
    }

    /// Performs the buffer-wide update: self += α · other
    ///
    /// Both histories must have congruent layouts ([History::congruent]); the
    /// full maps are compared, not just the buffer sizes.
    pub fn update(&mut self, alpha: f64, other: &History) -> Result<(), StrError> {
        if !self.congruent(other) {
            return Err("histories have different layouts");
        }
        for (value, increment) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *value += alpha * increment;
        }
        Ok(())
    }

    /// Performs self += α · other comparing only the buffer sizes
    ///
    /// Performance opt-in for inner loops: the caller must guarantee that both
    /// histories share one layout, otherwise two same-sized but differently
    /// named layouts are silently mixed. Prefer [History::update].
    pub fn update_unchecked(&mut self, alpha: f64, other: &History) -> Result<(), StrError> {
        if self.size != other.size {
            return Err("histories have different buffer sizes");
        }
        for (value, increment) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *value += alpha * increment;
        }
        Ok(())
    }

    /// Locates a slot and checks the requested kind against the declared kind
    fn locate<T: StateVariable>(&self, name: &str) -> Result<usize, StrError> {
        let offset = match self.offsets.get(name) {
            Some(offset) => *offset,
            None => return Err("state variable is not present in the history"),
        };
        if self.kinds[name] != T::KIND {
            return Err("state variable was declared with a different storage kind");
        }
        Ok(offset)
    }
}

impl<'a> Default for History<'a> {
    fn default() -> Self {
        History::new()
    }
}

impl<'a, 'b> AddAssign<&History<'b>> for History<'a> {
    /// Performs the element-wise accumulation: self += other
    ///
    /// # Panics
    ///
    /// A panic will occur if the histories have different layouts; use
    /// [History::update] for the fallible form.
    fn add_assign(&mut self, other: &History<'b>) {
        assert!(self.congruent(other), "histories have different layouts");
        for (value, increment) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *value += increment;
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
