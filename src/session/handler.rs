//! Interactive shell loop.
//!
//! Reads lines, hands them to the dispatcher and writes back whatever the
//! command produced. Works over any async reader/writer pair so it can run on
//! stdin/stdout or on in-memory buffers.

use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::protocol::dispatcher::error_result;
use crate::protocol::{CommandResult, CommandStatus, Dispatcher, responses};
use crate::session::Session;

/// Runs the shell until the exit command or end of input.
///
/// - Writes the greeting once, then the prompt before every line.
/// - Rejects lines longer than `max_command_length`, line ending excluded.
/// - Stops on a line equal to `exit_command`; the dispatcher never sees it.
pub async fn run_shell<R, W>(
    mut reader: R,
    mut writer: W,
    session: &mut Session,
    dispatcher: &Dispatcher,
    config: &ShellConfig,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    if !config.greeting.is_empty() {
        writer.write_all(format!("{}\n", config.greeting).as_bytes()).await?;
    }

    let mut buffer = Vec::new();
    loop {
        writer.write_all(config.prompt.as_bytes()).await?;
        writer.flush().await?;

        buffer.clear();
        if reader.read_until(b'\n', &mut buffer).await? == 0 {
            info!("End of input, closing session");
            break;
        }

        // Invalid UTF-8 is replaced rather than ending the session
        let line = String::from_utf8_lossy(&buffer);
        let trimmed = line.trim_end_matches(['\r', '\n']);

        if trimmed.len() > config.max_command_length {
            let result = error_result(&ShellError::CommandTooLong);
            write_result(&mut writer, &result).await?;
            continue;
        }

        if trimmed == config.exit_command {
            info!("Exit requested");
            break;
        }

        match dispatcher.dispatch_line(session, trimmed) {
            Some(result) => write_result(&mut writer, &result).await?,
            None => debug!("Skipping blank line"),
        }
    }

    writer.flush().await
}

async fn write_result<W>(writer: &mut W, result: &CommandResult) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    if result.status == CommandStatus::ClearScreen {
        writer.write_all(responses::CLEAR_SCREEN.as_bytes()).await?;
    }
    for line in &result.output {
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }
    Ok(())
}
