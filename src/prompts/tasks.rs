use indoc::formatdoc;

use crate::actuators::chat::dto::TaskRecord;

/// Renders the client's task list as a context block, or nothing for an empty list.
pub fn task_context(tasks: &[TaskRecord]) -> Option<String> {
    if tasks.is_empty() {
        return None;
    }

    let tasks = serde_json::to_string_pretty(tasks).unwrap_or_else(|_| format!("{:?}", tasks));
    Some(formatdoc! {"
            The user has the following tasks:
            {tasks}

            Please consider these tasks when responding."
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_has_no_context() {
        assert_eq!(task_context(&[]), None);
    }

    #[test]
    fn renders_pretty_json_between_instructions() {
        let context = task_context(&[TaskRecord::new("laundry", "easy", "2")]).unwrap();
        assert_eq!(
            context,
            "The user has the following tasks:\n\
             [\n  {\n    \"task\": \"laundry\",\n    \"difficulty\": \"easy\",\n    \
             \"rating\": \"2\"\n  }\n]\n\
             \n\
             Please consider these tasks when responding."
        );
    }

    #[test]
    fn keeps_task_order() {
        let context = task_context(&[
            TaskRecord::new("first", "easy", "1"),
            TaskRecord::new("second", "hard", "5"),
        ])
        .unwrap();
        let first = context.find("\"first\"").unwrap();
        let second = context.find("\"second\"").unwrap();
        assert!(first < second);
    }
}
