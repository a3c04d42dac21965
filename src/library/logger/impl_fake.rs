use crate::library::logger::interface::Logger;
use std::sync::{Arc, Mutex};

/// Records every line instead of printing it. Namespaced children share the
/// parent's buffer.
#[derive(Clone, Default)]
pub struct LoggerFake {
    namespace: Option<String>,
    lines: Arc<Mutex<Vec<String>>>,
}

impl LoggerFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn errors(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|line| line.starts_with("ERROR"))
            .collect()
    }

    fn push(&self, level: &str, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let line = match &self.namespace {
            Some(namespace) => format!("{} {}: {}", level, namespace, message),
            None => format!("{} {}", level, message),
        };
        self.lines
            .lock()
            .map_err(|e| e.to_string())?
            .push(line);
        Ok(())
    }
}

impl Logger for LoggerFake {
    fn info(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.push("INFO", message)
    }

    fn error(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.push("ERROR", message)
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        let new_namespace = match &self.namespace {
            Some(current) => format!("{}:{}", current, namespace),
            None => namespace.to_string(),
        };

        Arc::new(LoggerFake {
            namespace: Some(new_namespace),
            lines: self.lines.clone(),
        })
    }
}
