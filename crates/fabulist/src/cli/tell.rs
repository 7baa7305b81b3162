//! `fabulist tell` handler.

use std::sync::Arc;
use std::time::Duration;

use fabulist::{
    AudioOutput, FabulistConfig, GeminiClient, PlaybackSession, SpeechSynthesis, StoryApp,
    StoryPipeline, WavFileOutput, narration_text, render_html, render_text,
};
use tracing::{info, instrument};

use super::TellArgs;

const PLAYBACK_POLL: Duration = Duration::from_millis(100);

/// Generate a story and deliver it in the requested forms.
#[instrument(skip_all, fields(category = %args.category))]
pub async fn run_tell(
    args: &TellArgs,
    config: &FabulistConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = Arc::new(GeminiClient::from_settings(config.gemini())?);
    let pipeline = StoryPipeline::new(client.clone(), client.clone())
        .with_story_settings(config.story().clone())
        .with_illustration_settings(config.illustration().clone());
    let app = StoryApp::new(pipeline);

    let story = app.submit(&args.category).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&story)?);
    } else {
        print!("{}", render_text(&story));
    }

    if let Some(path) = &args.html {
        std::fs::write(path, render_html(&story))?;
        info!(path = %path.display(), "HTML story written");
    }

    if args.read_aloud {
        let narration = narration_text(&story);
        if args.speaker {
            play_on_speaker(args, config, client.as_ref(), &narration).await?;
        } else {
            let output = WavFileOutput::new(&args.wav);
            narrate(output, args, config, client.as_ref(), &narration).await?;
            eprintln!("Narration saved to {}", args.wav.display());
        }
    }

    Ok(())
}

async fn narrate<O: AudioOutput>(
    output: O,
    args: &TellArgs,
    config: &FabulistConfig,
    narrator: &dyn SpeechSynthesis,
    narration: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = PlaybackSession::new(output);
    session.set_muted(args.mute);
    let result = session
        .read_aloud(narrator, config.narration(), narration)
        .await;
    if let Err(e) = result {
        session.close();
        return Err(e.into());
    }
    session.wait_until_finished(PLAYBACK_POLL).await;
    session.close();
    Ok(())
}

#[cfg(feature = "playback")]
async fn play_on_speaker(
    args: &TellArgs,
    config: &FabulistConfig,
    narrator: &dyn SpeechSynthesis,
    narration: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = fabulist::SpeakerOutput::open_default()?;
    narrate(output, args, config, narrator, narration).await
}

#[cfg(not(feature = "playback"))]
async fn play_on_speaker(
    _args: &TellArgs,
    _config: &FabulistConfig,
    _narrator: &dyn SpeechSynthesis,
    _narration: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    Err("speaker playback requires the `playback` feature".into())
}
