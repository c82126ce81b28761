use crate::ports::{Console, SigningKeySource, StackLauncher};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: Console, K: SigningKeySource, L: StackLauncher> {
    console: C,
    keys: K,
    launcher: L,
}

impl<C: Console, K: SigningKeySource, L: StackLauncher> AppContext<C, K, L> {
    /// Create a new application context.
    pub fn new(console: C, keys: K, launcher: L) -> Self {
        Self { console, keys, launcher }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn keys(&self) -> &K {
        &self.keys
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }
}
