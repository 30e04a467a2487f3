use crate::{config::Config, error::SmartadsError, Opt};
use log::*;
use std::process::Command;

/// The Gradle wrapper script shipped next to the build files. Resolved from
/// the platform once; always invoked relative to the working directory.
fn wrapper() -> &'static str {
    if cfg!(windows) {
        "gradlew.bat"
    } else {
        "./gradlew"
    }
}

/// One Gradle run, held as discrete argument tokens so nothing ever passes
/// through a shell. Flags that aren't requested are never pushed, so the
/// argument list contains no empty tokens.
#[derive(Debug)]
pub(crate) struct Invocation {
    wrapper: &'static str,
    args: Vec<String>,
}

impl Invocation {
    pub(crate) fn clean() -> Self {
        Self {
            wrapper: wrapper(),
            args: vec!["clean".to_string()],
        }
    }

    pub(crate) fn download(opt: &Opt, config: &Config) -> Self {
        let mut args = Vec::new();

        if opt.stacktrace {
            args.push("--stacktrace".to_string());
        }
        if opt.info {
            args.push("--info".to_string());
        }
        if opt.debug {
            args.push("--debug".to_string());
        }

        args.push("clean".to_string());
        args.push("download".to_string());

        if config.notifications {
            args.push("-Pnotifications".to_string());
        }
        if config.smartads {
            args.push("-Psmartads".to_string());
        }
        args.push(format!("-Pnetworks={}", config.networks.join(",")));

        Self {
            wrapper: wrapper(),
            args,
        }
    }

    /// Runs the wrapper, blocks until it exits and returns its exit code
    /// unchanged. A child killed by a signal has no code and is reported as 1.
    pub(crate) fn run(&self) -> Result<i32, SmartadsError> {
        debug!("executing `{} {}`", self.wrapper, self.args.join(" "));

        let status = Command::new(self.wrapper)
            .args(&self.args)
            .status()
            .map_err(|e| SmartadsError::GradleSpawn(self.wrapper, e))?;
        let code = status.code().unwrap_or(1);

        debug!("got exit code {}", code);
        Ok(code)
    }

    #[cfg(test)]
    fn args(&self) -> &[String] {
        &self.args
    }
}
