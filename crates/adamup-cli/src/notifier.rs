//! Terminal notifications and prompts.

use std::io::{self, BufRead, Write};

use adamup_core::{PromptRequest, UserNotifierPort};
use async_trait::async_trait;
use tracing::warn;

/// Prints notifications and reads prompt answers from stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier {
    assume_yes: bool,
}

impl TerminalNotifier {
    /// Interactive notifier.
    pub const fn new() -> Self {
        Self { assume_yes: false }
    }

    /// Answer every prompt with its first action without reading stdin.
    pub const fn assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }
}

/// Match typed input against the prompt's actions.
///
/// Case-insensitive; a single letter selects the first action starting with
/// it. Empty or unmatched input is a dismissal.
pub fn match_answer(input: &str, actions: &[String]) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    actions
        .iter()
        .find(|a| a.eq_ignore_ascii_case(input))
        .or_else(|| {
            let mut chars = input.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => actions.iter().find(|a| {
                    a.chars()
                        .next()
                        .is_some_and(|first| first.eq_ignore_ascii_case(&c))
                }),
                _ => None,
            }
        })
        .cloned()
}

fn read_answer(request: &PromptRequest) -> io::Result<Option<String>> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", request.message)?;
    write!(stdout, "[{}]: ", request.actions.join("/"))?;
    stdout.flush()?;
    drop(stdout);

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(match_answer(&line, &request.actions))
}

#[async_trait]
impl UserNotifierPort for TerminalNotifier {
    fn show_info(&self, message: &str) {
        println!("{message}");
    }

    fn show_error(&self, message: &str) {
        eprintln!("{message}");
    }

    async fn ask(&self, request: PromptRequest) -> Option<String> {
        if request.actions.is_empty() {
            println!("{}", request.message);
            return None;
        }

        if self.assume_yes {
            let answer = request.actions.first().cloned();
            println!(
                "{} [{}]",
                request.message,
                answer.as_deref().unwrap_or_default()
            );
            return answer;
        }

        // A dropped prompt leaves this read behind until the runtime's
        // shutdown grace runs out.
        match tokio::task::spawn_blocking(move || read_answer(&request)).await {
            Ok(Ok(answer)) => answer,
            Ok(Err(e)) => {
                warn!(error = %e, "Failed to read prompt answer");
                None
            }
            Err(e) => {
                warn!(error = %e, "Prompt task failed");
                None
            }
        }
    }
}
