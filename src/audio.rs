use crate::core::{AnalysisConfig, EnvelopeExtractor, SharedSession, ANALYSER_FFT_SIZE};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

// Element -> source -> analyser -> destination. Built on first play, since
// browsers only allow an AudioContext to start from a user gesture.
struct AnalysisGraph {
    ctx: web::AudioContext,
    analyser: web::AnalyserNode,
    _source: web::MediaElementAudioSourceNode,
}

fn build_graph(element: &web::HtmlAudioElement) -> anyhow::Result<AnalysisGraph> {
    let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("AudioContext: {:?}", e))?;
    let analyser = ctx
        .create_analyser()
        .map_err(|e| anyhow::anyhow!("AnalyserNode: {:?}", e))?;
    analyser.set_fft_size(ANALYSER_FFT_SIZE);
    let source = ctx
        .create_media_element_source(element)
        .map_err(|e| anyhow::anyhow!("MediaElementSource: {:?}", e))?;
    source
        .connect_with_audio_node(&analyser)
        .map_err(|e| anyhow::anyhow!("connect source: {:?}", e))?;
    analyser
        .connect_with_audio_node(&ctx.destination())
        .map_err(|e| anyhow::anyhow!("connect analyser: {:?}", e))?;
    Ok(AnalysisGraph {
        ctx,
        analyser,
        _source: source,
    })
}

/// One loaded audio file and its analysis state.
struct AudioSession {
    element: web::HtmlAudioElement,
    url: String,
    graph: Option<AnalysisGraph>,
    extractor: Option<EnvelopeExtractor>,
    active: bool,
    pending_frame: Option<i32>,
}

impl AudioSession {
    fn ensure_graph(&mut self) -> anyhow::Result<()> {
        if self.graph.is_none() {
            let graph = build_graph(&self.element)?;
            let config = AnalysisConfig {
                sample_rate: graph.ctx.sample_rate(),
                fft_size: graph.analyser.fft_size(),
                bin_count: graph.analyser.frequency_bin_count() as usize,
            };
            log::info!(
                "[audio] analyser ready sr={} fft={} bins={} speech_bins={:?}",
                config.sample_rate,
                config.fft_size,
                config.bin_count,
                config.speech_bins()
            );
            self.extractor = Some(EnvelopeExtractor::new(config));
            self.graph = Some(graph);
        }
        Ok(())
    }

    // Halt playback and analysis. Returns true if a session was running.
    fn halt(&mut self) -> bool {
        let was_active = std::mem::replace(&mut self.active, false);
        _ = self.element.pause();
        self.element.set_current_time(0.0);
        if let Some(id) = self.pending_frame.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        if let Some(x) = &mut self.extractor {
            x.reset();
        }
        was_active
    }

    fn release(mut self) {
        self.halt();
        if let Some(graph) = self.graph.take() {
            _ = graph.ctx.close();
        }
        _ = web::Url::revoke_object_url(&self.url);
    }
}

/// Playback control plus the envelope analysis tick.
///
/// The tick runs on its own requestAnimationFrame chain, separate from the
/// render loop, and writes each openness sample into the shared session.
#[derive(Clone)]
pub struct AudioPlayer {
    session: Rc<RefCell<Option<AudioSession>>>,
    shared: SharedSession,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl AudioPlayer {
    pub fn new(shared: SharedSession) -> Self {
        let player = Self {
            session: Rc::new(RefCell::new(None)),
            shared,
            tick: Rc::new(RefCell::new(None)),
        };
        let p = player.clone();
        *player.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || p.on_tick()) as Box<dyn FnMut()>));
        player
    }

    pub fn has_audio(&self) -> bool {
        self.session.borrow().is_some()
    }

    pub fn is_playing(&self) -> bool {
        self.session
            .borrow()
            .as_ref()
            .map(|s| s.active)
            .unwrap_or(false)
    }

    /// Replace the current file. Any running session is stopped first.
    pub fn load(&self, file: web::File) -> anyhow::Result<()> {
        self.stop();
        let url = web::Url::create_object_url_with_blob(&file)
            .map_err(|e| anyhow::anyhow!("object url: {:?}", e))?;
        let element = web::HtmlAudioElement::new_with_src(&url)
            .map_err(|e| anyhow::anyhow!("audio element: {:?}", e))?;

        let on_ended = self.clone();
        let closure = Closure::wrap(Box::new(move || {
            log::info!("[audio] ended");
            on_ended.stop();
        }) as Box<dyn FnMut()>);
        _ = element.add_event_listener_with_callback("ended", closure.as_ref().unchecked_ref());
        closure.forget();

        let previous = self.session.borrow_mut().replace(AudioSession {
            element,
            url,
            graph: None,
            extractor: None,
            active: false,
            pending_frame: None,
        });
        if let Some(old) = previous {
            old.release();
        }
        log::info!("[audio] loaded {}", file.name());
        Ok(())
    }

    /// Start playback and analysis. Only takes effect in audio mode.
    pub fn play(&self) -> anyhow::Result<()> {
        if !self.shared.update(|s| s.motion.audio_started()) {
            anyhow::bail!("audio mode is not selected");
        }
        let started = {
            let mut guard = self.session.borrow_mut();
            match guard.as_mut() {
                Some(s) => s.ensure_graph().and_then(|_| {
                    if let Some(g) = &s.graph {
                        _ = g.ctx.resume();
                    }
                    let promise = s
                        .element
                        .play()
                        .map_err(|e| anyhow::anyhow!("play: {:?}", e))?;
                    s.active = true;
                    Ok(promise)
                }),
                None => Err(anyhow::anyhow!("no audio loaded")),
            }
        };
        let promise = match started {
            Ok(p) => p,
            Err(e) => {
                self.shared.update(|s| s.motion.audio_stopped());
                return Err(e);
            }
        };

        let on_reject = self.clone();
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[audio] playback rejected: {:?}", e);
                on_reject.stop();
            }
        });

        log::info!("[audio] play");
        self.schedule();
        Ok(())
    }

    /// Stop playback, cancel the pending tick and zero the openness.
    pub fn stop(&self) {
        let was_active = self
            .session
            .borrow_mut()
            .as_mut()
            .map(|s| s.halt())
            .unwrap_or(false);
        self.shared.update(|s| s.motion.audio_stopped());
        if was_active {
            log::info!("[audio] stop");
        }
    }

    fn schedule(&self) {
        let Some(w) = web::window() else { return };
        let id = match self.tick.borrow().as_ref() {
            Some(cb) => w.request_animation_frame(cb.as_ref().unchecked_ref()).ok(),
            None => None,
        };
        if let Some(s) = self.session.borrow_mut().as_mut() {
            s.pending_frame = id;
        }
    }

    fn on_tick(&self) {
        let sensitivity = self.shared.snapshot().params.sensitivity();
        let sample = {
            let mut guard = self.session.borrow_mut();
            let Some(s) = guard.as_mut() else { return };
            s.pending_frame = None;
            if !s.active {
                return;
            }
            if s.element.paused() || s.element.ended() {
                None
            } else {
                match (&s.graph, &mut s.extractor) {
                    (Some(g), Some(x)) => {
                        g.analyser.get_byte_frequency_data(x.buffer_mut());
                        Some(x.sample(sensitivity))
                    }
                    _ => Some(0.0),
                }
            }
        };
        match sample {
            Some(openness) => {
                self.shared.update(|s| s.motion.push_envelope(openness));
                self.schedule();
            }
            None => self.stop(),
        }
    }
}
