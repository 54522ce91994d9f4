//! Watch and build commands - print invocation arguments

use crate::cli::args::{BuildArgs, CommandArgs, OutputFormat};
use crate::cli::Settings;
use crate::error::{TailwindError, TailwindResult};
use crate::provisioner::Tailwind;
use std::ffi::{OsStr, OsString};
use std::io::Write;

/// Print the watch-mode command
pub fn watch(args: CommandArgs, settings: &Settings) -> TailwindResult<()> {
    let tailwind = Tailwind::with_options(settings.options())?;
    print_args(&tailwind.watch_command(&args.input, &args.output), args.format)
}

/// Print the one-shot build command
pub fn build(args: BuildArgs, settings: &Settings) -> TailwindResult<()> {
    let tailwind = Tailwind::with_options(settings.options())?;
    let files = args.files;
    print_args(
        &tailwind.build_command(&files.input, &files.output, args.minify),
        files.format,
    )
}

fn print_args(args: &[OsString], format: OutputFormat) -> TailwindResult<()> {
    let rendered = render_args(args, format)?;
    std::io::stdout()
        .lock()
        .write_all(&rendered)
        .map_err(|e| TailwindError::io("writing command to stdout", e))
}

/// Plain output is one raw argument per line; JSON requires UTF-8.
fn render_args(args: &[OsString], format: OutputFormat) -> TailwindResult<Vec<u8>> {
    match format {
        OutputFormat::Plain => {
            let mut out = Vec::new();
            for arg in args {
                out.extend_from_slice(&os_bytes(arg));
                out.push(b'\n');
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let args = args
                .iter()
                .map(|arg| {
                    arg.to_str().ok_or_else(|| {
                        TailwindError::NonUtf8Argument(arg.to_string_lossy().into_owned())
                    })
                })
                .collect::<TailwindResult<Vec<&str>>>()?;
            let mut out = serde_json::to_vec_pretty(&args)?;
            out.push(b'\n');
            Ok(out)
        }
    }
}

#[cfg(unix)]
fn os_bytes(arg: &OsStr) -> std::borrow::Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    std::borrow::Cow::Borrowed(arg.as_bytes())
}

#[cfg(not(unix))]
fn os_bytes(arg: &OsStr) -> std::borrow::Cow<'_, [u8]> {
    match arg.to_string_lossy() {
        std::borrow::Cow::Borrowed(s) => std::borrow::Cow::Borrowed(s.as_bytes()),
        std::borrow::Cow::Owned(s) => std::borrow::Cow::Owned(s.into_bytes()),
    }
}
