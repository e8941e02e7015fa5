#[cfg(test)]
mod interaction_tests {
    use crate::core::config::ConfigManager;
    use crate::core::greeting;
    use crate::core::model::GreetingReply;
    use tempfile::tempdir;

    #[test]
    fn simulate_click_session() {
        // Fresh install: no settings file yet, defaults apply
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().to_path_buf());
        let settings = manager.load();
        assert!(settings.native_dialogs);

        // First click: user cancels the prompt
        let reply = greeting::reply_for(None);
        assert_eq!(reply.message, "That's not a valid name.");

        // Second click: user submits without typing
        let reply = greeting::reply_for(Some(""));
        assert!(!reply.valid);

        // Third click: user enters a name
        let reply = greeting::reply_for(Some("Alice"));
        assert!(reply.valid);
        assert_eq!(reply.message, "Hi, Alice!");

        // Clicks are independent; nothing carries over
        let reply = greeting::reply_for(Some("Bob"));
        assert_eq!(reply.message, "Hi, Bob!");
    }

    #[test]
    fn reply_round_trips_through_json() {
        let reply = greeting::reply_for(Some("Alice"));
        let json = serde_json::to_string(&reply).unwrap();

        // The webview reads these two fields
        assert!(json.contains(r#""valid":true"#));
        assert!(json.contains("Hi, Alice!"));

        let back: GreetingReply = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reply);
    }
}
