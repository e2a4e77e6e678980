//! Audio Output
//!
//! With the `audio` feature the music plays through rodio on the default
//! output device. Without it (or when no device can be opened) the card
//! runs silently.

use card_core::AudioBackend;

/// Backend for this build
pub fn default_backend() -> Box<dyn AudioBackend> {
    #[cfg(feature = "audio")]
    {
        Box::new(rodio_backend::RodioBackend)
    }
    #[cfg(not(feature = "audio"))]
    {
        Box::new(card_core::UnavailableBackend)
    }
}

#[cfg(feature = "audio")]
mod rodio_backend {
    use std::fs::File;
    use std::io::BufReader;

    use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

    use card_core::{AudioBackend, AudioError, AudioPlayer, MusicSettings};

    pub struct RodioBackend;

    pub struct RodioPlayer {
        sink: Sink,
        // Dropping the stream silences the sink
        _stream: OutputStream,
        _handle: OutputStreamHandle,
    }

    impl AudioBackend for RodioBackend {
        fn create_player(
            &mut self,
            settings: &MusicSettings,
        ) -> Result<Box<dyn AudioPlayer>, AudioError> {
            let (stream, handle) = OutputStream::try_default()
                .map_err(|e| AudioError::DeviceUnavailable(e.to_string()))?;

            let file = File::open(&settings.path).map_err(|e| AudioError::Open {
                path: settings.path.clone(),
                source: e,
            })?;
            let source = Decoder::new(BufReader::new(file))
                .map_err(|e| AudioError::Decode(e.to_string()))?;

            let sink = Sink::try_new(&handle).map_err(|e| AudioError::Player(e.to_string()))?;
            sink.pause();
            sink.set_volume(settings.volume);
            if settings.looping {
                sink.append(source.repeat_infinite());
            } else {
                sink.append(source);
            }

            Ok(Box::new(RodioPlayer {
                sink,
                _stream: stream,
                _handle: handle,
            }))
        }
    }

    impl AudioPlayer for RodioPlayer {
        fn play(&mut self) -> Result<(), AudioError> {
            self.sink.play();
            Ok(())
        }

        fn pause(&mut self) -> Result<(), AudioError> {
            self.sink.pause();
            Ok(())
        }

        fn release(self: Box<Self>) -> Result<(), AudioError> {
            self.sink.stop();
            Ok(())
        }
    }
}
