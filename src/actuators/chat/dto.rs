use serde::{Deserialize, Deserializer, Serialize};

/// One entry of the client's task list. Forwarded into the prompt as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub task: String,
    pub difficulty: String,
    pub rating: String,
}

impl TaskRecord {
    pub fn new(
        task: impl Into<String>,
        difficulty: impl Into<String>,
        rating: impl Into<String>,
    ) -> Self {
        Self {
            task: task.into(),
            difficulty: difficulty.into(),
            rating: rating.into(),
        }
    }
}

/// Body of `POST /chat`.
///
/// `message` is optional on the wire so that a missing field is reported as an
/// empty message rather than a malformed body. A `null` task list counts as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tasks: Vec<TaskRecord>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            tasks: Vec::new(),
        }
    }

    pub fn with_tasks(mut self, tasks: Vec<TaskRecord>) -> Self {
        self.tasks = tasks;
        self
    }
}

/// The only response shape of the relay, for successes and failures alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

impl ChatReply {
    pub fn new(reply: impl Into<String>) -> Self {
        Self { reply: reply.into() }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_default_to_empty() {
        let request: ChatRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request.message, None);
        assert!(request.tasks.is_empty());
    }

    #[test]
    fn null_tasks_are_empty() {
        let request: ChatRequest =
            serde_json::from_value(json!({ "message": "hi", "tasks": null })).unwrap();
        assert_eq!(request.message.as_deref(), Some("hi"));
        assert!(request.tasks.is_empty());
    }

    #[test]
    fn parses_task_records_in_order() {
        let request: ChatRequest = serde_json::from_value(json!({
            "message": "what first?",
            "tasks": [
                { "task": "laundry", "difficulty": "easy", "rating": "2" },
                { "task": "taxes", "difficulty": "hard", "rating": "5" },
            ],
        }))
        .unwrap();
        assert_eq!(
            request.tasks,
            vec![
                TaskRecord::new("laundry", "easy", "2"),
                TaskRecord::new("taxes", "hard", "5"),
            ]
        );
    }

    #[test]
    fn rejects_non_string_task_fields() {
        let result = serde_json::from_value::<ChatRequest>(json!({
            "message": "hi",
            "tasks": [{ "task": "laundry", "difficulty": "easy", "rating": 2 }],
        }));
        assert!(result.is_err());
    }
}
