use console::{style, Term};
use std::time::Instant;

/// Prints one `[n/total]` status line per task.
pub struct TaskRunner {
    term: Term,
    num_tasks: usize,
    current_task: usize,
    now: Instant,
    descr: String,
    started: bool,
}

impl TaskRunner {
    pub fn new(num_tasks: usize) -> Self {
        Self {
            term: Term::stdout(),
            num_tasks,
            current_task: 0,
            now: Instant::now(),
            descr: "".into(),
            started: false,
        }
    }

    fn task_id(&self) -> String {
        style(format!("[{}/{}]", self.current_task + 1, self.num_tasks))
            .bold()
            .to_string()
    }

    pub fn start_task(&mut self, descr: impl Into<String>) {
        if self.started {
            self.finish_task(true);
        }
        self.now = Instant::now();
        self.descr = descr.into();
        self.started = true;
        // the pending line is only useful when it can be replaced
        if self.term.is_term() {
            println!("{} {}", self.task_id(), &self.descr);
        }
    }

    fn finish_task(&mut self, skipped: bool) {
        self.started = false;
        if self.term.is_term() {
            self.term.clear_last_lines(1).ok();
        }
        let status = if skipped {
            "[SKIPPED]".to_string()
        } else {
            format!("[{}ms]", self.now.elapsed().as_millis())
        };
        println!("{} {} {}", self.task_id(), &self.descr, status);
        self.current_task += 1;
    }

    pub fn end_task(&mut self) {
        self.finish_task(false);
    }
}

pub fn warn(msg: impl std::fmt::Display) {
    println!("{} {}", style("[WARNING]").yellow(), msg);
}

pub fn done(msg: impl std::fmt::Display) {
    println!("{} {}", style("[DONE]").green(), msg);
}
