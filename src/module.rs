use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::{Bilinear, BilinearKernel, OperationError, TensorHandle};

/// Module identifier used when the embedding build supplies none.
pub const DEFAULT_MODULE_NAME: &str = "nv_bilinear_upsampling_cuda";

pub const BILINEAR_FORWARD: &str = "bilinear_forward";
pub const BILINEAR_BACKWARD: &str = "bilinear_backward";

type BoundOp<T> = Box<dyn Fn(&T, usize, usize) -> Result<T, OperationError> + Send + Sync>;

/// # Module
///
/// String-keyed table of entry points, the shape the host runtime's loader
/// consumes. The module name is configuration, not logic.
pub struct Module<T> {
    name: String,
    table: FxHashMap<&'static str, BoundOp<T>>,
}

impl<T: TensorHandle> Module<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: FxHashMap::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bind `op` under `name`, replacing any previous binding.
    pub fn def<F>(&mut self, name: &'static str, op: F)
    where
        F: Fn(&T, usize, usize) -> Result<T, OperationError> + Send + Sync + 'static,
    {
        log::debug!("{}: registering {}", self.name, name);
        self.table.insert(name, Box::new(op));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    pub fn ops(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.table.keys().copied()
    }

    pub fn call(
        &self,
        name: &str,
        tensor: &T,
        height: usize,
        width: usize,
    ) -> Result<T, OperationError> {
        let op = self
            .table
            .get(name)
            .ok_or_else(|| OperationError::UnknownOperation(name.to_string()))?;
        op(tensor, height, width)
    }
}

impl<T> std::fmt::Debug for Module<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ops = self.table.keys().copied().collect::<Vec<_>>();
        ops.sort_unstable();
        f.debug_struct("Module")
            .field("name", &self.name)
            .field("ops", &ops)
            .finish()
    }
}

/// Register the two bilinear entry points under `name`.
///
/// This is the whole exported surface: `bilinear_forward` and
/// `bilinear_backward`, each dispatching through a [`Bilinear`] wrapping
/// `kernel`.
pub fn register_bilinear<K>(name: impl Into<String>, kernel: K) -> Module<K::Tensor>
where
    K: BilinearKernel + Send + Sync + 'static,
{
    let kernel = Arc::new(kernel);
    let mut module = Module::new(name);

    let forward = Bilinear::new(kernel.clone());
    module.def(BILINEAR_FORWARD, move |t, h, w| forward.forward(t, h, w));

    let backward = Bilinear::new(kernel);
    module.def(BILINEAR_BACKWARD, move |t, h, w| backward.backward(t, h, w));

    module
}
