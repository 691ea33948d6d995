use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

/// ConsoleProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port. A view-position bar is
/// drawn with indicatif and regular messages are printed above it. In quiet
/// mode everything except errors is suppressed.
pub struct ConsoleProgressReporter {
    quiet: bool,
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl ConsoleProgressReporter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            progress_bar: RefCell::new(None),
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            pb.clone()
        } else {
            let pb = ProgressBar::new(total as u64);
            let style = ProgressStyle::default_bar()
                .template("   [{bar:30.cyan/blue}] {pos}/{len} views - {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-");
            pb.set_style(style);
            *pb_option = Some(pb.clone());
            pb
        }
    }

    fn print(&self, message: &str) {
        match self.progress_bar.borrow().as_ref() {
            // A hidden bar (stderr is not a terminal) swallows println
            Some(pb) if !pb.is_hidden() => pb.println(message),
            _ => eprintln!("{}", message),
        }
    }
}

impl Default for ConsoleProgressReporter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ProgressReporter for ConsoleProgressReporter {
    fn report(&self, message: &str) {
        if self.quiet {
            return;
        }
        self.print(message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        if self.quiet {
            return;
        }
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        // Errors and warnings are shown even in quiet mode
        match self.progress_bar.borrow().as_ref() {
            Some(pb) => pb.suspend(|| eprintln!("{}", message)),
            None => eprintln!("{}", message),
        }
    }

    fn report_completion(&self, message: &str) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
        if self.quiet {
            return;
        }
        eprintln!("{}", message);
    }
}
