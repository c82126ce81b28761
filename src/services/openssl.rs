use std::fs;
use std::path::PathBuf;
use std::process::Command;

use crate::domain::AppError;
use crate::domain::keys::PemKeyPair;
use crate::ports::SigningKeySource;

const KEY_BITS: &str = "1024";

/// Generates RSA signing keys by shelling out to `openssl`.
///
/// Key material only ever touches a scoped temporary directory, removed on
/// every exit path. A non-zero exit from the tool is fatal and not retried.
pub struct OpensslKeySource {
    program: String,
    scratch_root: Option<PathBuf>,
}

impl OpensslKeySource {
    pub fn new() -> Self {
        Self { program: "openssl".to_string(), scratch_root: None }
    }

    #[cfg(test)]
    fn with_program(program: &str) -> Self {
        Self { program: program.to_string(), scratch_root: None }
    }

    #[cfg(test)]
    fn in_scratch_root(mut self, root: &std::path::Path) -> Self {
        self.scratch_root = Some(root.to_path_buf());
        self
    }

    fn scratch_dir(&self) -> Result<tempfile::TempDir, AppError> {
        let dir = match &self.scratch_root {
            Some(root) => tempfile::Builder::new().prefix("sdbox-jwt").tempdir_in(root)?,
            None => tempfile::Builder::new().prefix("sdbox-jwt").tempdir()?,
        };
        Ok(dir)
    }

    fn run(&self, args: &[&str]) -> Result<(), AppError> {
        let output = Command::new(&self.program).args(args).output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::CommandFailed {
                command: format!("{} {}", self.program, args.join(" ")),
                details: if stderr.is_empty() { "unknown error".to_string() } else { stderr },
            });
        }
        Ok(())
    }
}

impl Default for OpensslKeySource {
    fn default() -> Self {
        Self::new()
    }
}

impl SigningKeySource for OpensslKeySource {
    fn generate_pair(&self) -> Result<PemKeyPair, AppError> {
        let scratch = self.scratch_dir()?;
        let private_path = scratch.path().join("jwt.pem");
        let public_path = scratch.path().join("jwt.pub");
        let private_arg = private_path.to_string_lossy();
        let public_arg = public_path.to_string_lossy();

        self.run(&["genrsa", "-out", &private_arg, KEY_BITS])?;
        self.run(&["rsa", "-in", &private_arg, "-pubout", "-out", &public_arg])?;

        let private_pem = fs::read_to_string(&private_path)?.trim().to_string();
        let public_pem = fs::read_to_string(&public_path)?.trim().to_string();

        Ok(PemKeyPair { public_pem, private_pem })
    }
}
