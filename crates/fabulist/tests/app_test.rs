//! Tests for the story view state.

mod test_utils;

use std::sync::Arc;

use fabulist::{StoryApp, StoryErrorKind, StoryPhase};
use test_utils::{ScriptedWriter, pipeline, sea_story_json};

#[tokio::test]
async fn test_submit_shows_story() -> anyhow::Result<()> {
    let writer = Arc::new(ScriptedWriter::new(vec![Some(sea_story_json())], 0));
    let app = StoryApp::new(pipeline(writer.clone()));
    assert_eq!(app.phase(), StoryPhase::Empty);
    assert!(!app.can_tell_another());

    let story = app.submit("  the sea ").await?;

    assert_eq!(story.image_urls().len(), 2);
    assert!(app.phase().is_ready());
    assert!(app.can_tell_another());
    assert_eq!(app.story().as_ref(), Some(&story));
    assert_eq!(app.segments().iter().filter(|s| s.is_image()).count(), 2);
    assert!(
        app.narration()
            .expect("narration")
            .ends_with("The moral of the story is: Try new things, even \"scary\" ones.")
    );

    app.tell_another();
    assert_eq!(app.phase(), StoryPhase::Empty);
    assert!(app.story().is_none());
    Ok(())
}

#[tokio::test]
async fn test_blank_input_cannot_be_submitted() {
    let writer = Arc::new(ScriptedWriter::new(vec![Some(sea_story_json())], 0));
    let app = StoryApp::new(pipeline(writer.clone()));

    assert!(!app.can_submit("   "));
    assert!(app.can_submit("dragons"));

    let err = app.submit(" \t ").await.unwrap_err();
    assert_eq!(err.story_kind(), Some(&StoryErrorKind::EmptyCategory));
    assert_eq!(writer.calls(), 0);
    assert_eq!(app.phase(), StoryPhase::Empty);
}

#[tokio::test]
async fn test_overlapping_submit_is_rejected() -> anyhow::Result<()> {
    let writer = Arc::new(ScriptedWriter::new(vec![Some(sea_story_json())], 50));
    let app = StoryApp::new(pipeline(writer.clone()));

    let second = async {
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        assert!(app.is_loading());
        assert!(!app.can_submit("the sea"));
        assert!(app.phase().is_loading());
        app.submit("the sea").await
    };
    let (first, second) = tokio::join!(app.submit("the sea"), second);

    first?;
    let err = second.unwrap_err();
    assert_eq!(err.story_kind(), Some(&StoryErrorKind::AlreadyGenerating));
    assert_eq!(writer.calls(), 1);
    // The rejected submit left the finished story alone
    assert!(app.phase().is_ready());
    assert!(!app.is_loading());
    Ok(())
}

#[tokio::test]
async fn test_failure_shows_message_and_releases_guard() -> anyhow::Result<()> {
    let writer = Arc::new(ScriptedWriter::new(
        vec![Some("not json".to_string()), Some(sea_story_json())],
        0,
    ));
    let app = StoryApp::new(pipeline(writer.clone()));

    let err = app.submit("robots").await.unwrap_err();
    assert!(matches!(
        err.story_kind(),
        Some(StoryErrorKind::MalformedResponse(_))
    ));
    assert_eq!(
        app.error_message().as_deref(),
        Some("The AI returned a story in an unexpected format. Please try again.")
    );
    assert!(!app.is_loading());
    assert!(!app.can_tell_another());

    // The guard was released, so a retry goes through
    app.submit("robots").await?;
    assert!(app.error_message().is_none());
    assert_eq!(writer.calls(), 2);
    Ok(())
}

#[tokio::test]
async fn test_cancelled_submit_releases_guard() -> anyhow::Result<()> {
    let writer = Arc::new(ScriptedWriter::new(vec![Some(sea_story_json())], 200));
    let app = StoryApp::new(pipeline(writer));

    let cancelled =
        tokio::time::timeout(std::time::Duration::from_millis(20), app.submit("owls")).await;
    assert!(cancelled.is_err());
    assert!(!app.is_loading());
    assert_eq!(app.phase(), StoryPhase::Empty);
    Ok(())
}
