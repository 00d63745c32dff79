//! Interactive read-eval-print loop

use super::{say, Agent, ToolClient};
use crate::llm::IntentClassifier;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const BANNER: &str = "Welcome! I can help you find Indian Railways train status.\n\
Type 'exit' to quit.\n\
Example query: 'What is the status of train 12301?' or 'Check train 12137 status.'\n";

const PROMPT: &str = "\nYou: ";

impl<C: IntentClassifier, T: ToolClient> Agent<C, T> {
    /// Run the conversation until `exit` or end of input
    ///
    /// # Errors
    /// Returns read errors on `input` and write errors on `output`.
    pub async fn run<R, W>(&self, input: R, output: &mut W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin + Send,
    {
        output.write_all(BANNER.as_bytes()).await?;
        let mut lines = input.lines();

        loop {
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;

            let Some(line) = lines.next_line().await? else {
                tracing::info!("Input closed, ending agent session");
                output.write_all(b"\n").await?;
                break;
            };

            let query = line.trim();
            if query.eq_ignore_ascii_case("exit") {
                say(output, "Goodbye!").await?;
                tracing::info!("Agent session ended");
                break;
            }

            self.respond(query, output).await?;
        }

        output.flush().await
    }
}
