use std::panic;

const BUG_REPORT_URL: &str = "https://github.com/opdec/opdec/issues/new";

/// Chain a request for a bug report onto the default panic output.
///
/// A panic is always a bug in the generator; malformed tables are reported
/// through the diagnostics channel and never get this far.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        default_hook(info);

        eprintln!();
        eprintln!("This is a bug in opdec, not in your opcode table.");
        eprintln!("If you would, please report it at the following URL:");
        eprintln!("  {BUG_REPORT_URL}");
    }));
}
