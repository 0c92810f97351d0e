//! Line-delimited JSON-RPC over stdin/stdout.

use crate::mcp::{JsonRpcErrorResponse, JsonRpcOutput, McpHandler};
use crate::utils::error::Result;
use std::string::FromUtf8Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

/// One JSON message per line. Generic over reader and writer so tests can
/// drive it with in-memory buffers.
pub struct StdioTransport<R, W> {
    reader: BufReader<R>,
    writer: W,
}

impl<R, W> StdioTransport<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: BufReader::new(reader),
            writer,
        }
    }

    /// Next trimmed line, `Some(Ok(""))` for a blank line, `None` on EOF.
    /// A line that is not UTF-8 comes back as its decode error.
    pub async fn read_line(
        &mut self,
    ) -> Result<Option<std::result::Result<String, FromUtf8Error>>> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes).await? == 0 {
            return Ok(None);
        }
        Ok(Some(
            String::from_utf8(bytes).map(|line| line.trim().to_string()),
        ))
    }

    pub async fn write_line(&mut self, message: &str) -> Result<()> {
        self.writer.write_all(message.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Answers requests until the input closes.
    pub async fn serve(&mut self, handler: &McpHandler) -> Result<()> {
        loop {
            let line = match self.read_line().await? {
                Some(Ok(line)) if line.is_empty() => continue,
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    tracing::warn!("❌ Line is not valid UTF-8: {}", e);
                    let output = JsonRpcOutput::Error(JsonRpcErrorResponse::parse_error(
                        format!("Parse error: {}", e),
                    ));
                    self.write_line(&output.to_json()).await?;
                    continue;
                }
                None => {
                    tracing::info!("👋 stdin closed, shutting down");
                    return Ok(());
                }
            };

            if let Some(output) = handler.handle_message(&line).await {
                self.write_line(&output.to_json()).await?;
            }
        }
    }
}

pub async fn run(handler: McpHandler) -> Result<()> {
    tracing::info!(
        "🚀 MCP server on stdio with {} tools",
        handler.registry().len()
    );
    let mut transport = StdioTransport::new(tokio::io::stdin(), tokio::io::stdout());
    transport.serve(&handler).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ToolRegistry;
    use crate::domain::model::ApiRequest;
    use crate::domain::ports::DashboardApi;
    use crate::mcp::error_codes;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::Arc;

    struct NoApi;

    #[async_trait]
    impl DashboardApi for NoApi {
        async fn send(&self, _request: ApiRequest) -> Result<Value> {
            Ok(Value::Null)
        }
    }

    fn handler() -> McpHandler {
        McpHandler::new(Arc::new(ToolRegistry::new(Arc::new(NoApi))))
    }

    #[tokio::test]
    async fn test_read_lines_until_eof() {
        let reader = tokio_test::io::Builder::new()
            .read(b"first\n\n  sec")
            .read(b"ond  \n")
            .build();
        let mut transport = StdioTransport::new(reader, Vec::new());
        assert_eq!(transport.read_line().await.unwrap().unwrap().unwrap(), "first");
        assert_eq!(transport.read_line().await.unwrap().unwrap().unwrap(), "");
        assert_eq!(transport.read_line().await.unwrap().unwrap().unwrap(), "second");
        assert!(transport.read_line().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_appends_newline() {
        let mut transport = StdioTransport::new(tokio_test::io::Builder::new().build(), Vec::new());
        transport.write_line(r#"{"ok":true}"#).await.unwrap();
        let written = String::from_utf8(transport.into_writer()).unwrap();
        assert_eq!(written, "{\"ok\":true}\n");
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_is_answered_and_serving_continues() {
        let reader = tokio_test::io::Builder::new()
            .read(b"\xff\xfe garbage\n")
            .read(b"{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n")
            .build();
        let mut transport = StdioTransport::new(reader, Vec::new());
        transport.serve(&handler()).await.unwrap();

        let written = String::from_utf8(transport.into_writer()).unwrap();
        let lines: Vec<Value> = written
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["id"], Value::Null);
        assert_eq!(lines[0]["error"]["code"], error_codes::PARSE_ERROR);
        assert_eq!(lines[1]["id"], 1);
        assert_eq!(lines[1]["result"], serde_json::json!({}));
    }
}
