use super::*;
use crate::export::text::{row_line, TextWriter};
use crate::state::{Controller, Event, Key, Phase, PresentationState, SessionHost};
use std::time::Duration;

fn deck_state() -> PresentationState {
    PresentationState::new(total_slides())
        .apply(Event::Start { audio: false })
        .apply(Event::IntroFinished)
}

fn text_transcript() -> String {
    let bytes = render_deck(deck(), TextWriter::new()).unwrap();
    String::from_utf8(bytes).unwrap()
}

fn html_document() -> String {
    let bytes = render_deck(deck(), export::html::HtmlWriter::new()).unwrap();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_deck_shape() {
    let slides = deck();
    assert_eq!(slides.len(), 7);
    assert_eq!(slides[0].title, "Legalização e Infraestrutura");
    assert!(matches!(slides[0].body, SlideBody::Cover { .. }));

    match slides[2].body {
        SlideBody::Table { rows, .. } => {
            assert_eq!(rows[0].clinic, "SP Indianópolis");
            assert_eq!(rows.len(), 16);
        }
        _ => panic!("third slide should be the clinic status table"),
    }
}

#[test]
fn test_status_classification() {
    assert_eq!(Status::from_label("Sim"), Status::Approved);
    assert_eq!(Status::from_label("Não precisa"), Status::NotNeeded);
    assert_eq!(Status::from_label("Protocolo"), Status::Pending);
    // Anything unrecognized, including the empty string, renders as pending.
    assert_eq!(Status::from_label(""), Status::Pending);
    assert_eq!(Status::from_label("???"), Status::Pending);
    assert_eq!(Status::Pending.label(), "Protocolo");
    assert_eq!(Status::Approved.fill_color(), "22C55E");
}

#[test]
fn test_navigation_ignored_before_deck() {
    let welcome = PresentationState::new(total_slides());
    assert_eq!(welcome.apply(Event::Next).current, 0);
    assert_eq!(welcome.apply(Event::Last).current, 0);

    let intro = welcome.apply(Event::Start { audio: false });
    assert_eq!(intro.phase, Phase::Intro);
    assert_eq!(intro.apply(Event::GoTo(4)).current, 0);
}

#[test]
fn test_intro_finishes_once() {
    let state = deck_state();
    assert_eq!(state.phase, Phase::SlideDeck);

    // A duplicate timer firing must not change anything.
    let again = state.apply(Event::Next).apply(Event::IntroFinished);
    assert_eq!(again.phase, Phase::SlideDeck);
    assert_eq!(again.current, 1);

    // And the welcome start event is dead once past the welcome screen.
    let restarted = again.apply(Event::Start { audio: true });
    assert_eq!(restarted.phase, Phase::SlideDeck);
    assert!(!restarted.audio_enabled);
}

#[test]
fn test_next_saturates_at_last_slide() {
    let mut state = deck_state();
    for _ in 0..total_slides() + 5 {
        state = state.apply(Event::Next);
    }
    assert_eq!(state.current, total_slides() - 1);

    state = state.apply(Event::Previous);
    assert_eq!(state.current, total_slides() - 2);
}

#[test]
fn test_goto_clamps_out_of_range() {
    let state = deck_state();
    assert_eq!(state.apply(Event::GoTo(3)).current, 3);
    assert_eq!(state.apply(Event::GoTo(9999)).current, total_slides() - 1);
    assert_eq!(state.apply(Event::GoTo(usize::MAX)).current, total_slides() - 1);

    let mut at_first = state.apply(Event::First);
    assert_eq!(at_first.current, 0);
    at_first = at_first.apply(Event::Previous);
    assert_eq!(at_first.current, 0);
}

#[test]
fn test_volume_clamps_and_survives_mute() {
    let state = deck_state();
    assert_eq!(state.apply(Event::SetVolume(-0.5)).volume, 0.0);
    assert_eq!(state.apply(Event::SetVolume(1.5)).volume, 1.0);

    let muted = state
        .apply(Event::SetVolume(0.3))
        .apply(Event::ToggleAudio)
        .apply(Event::ToggleAudio);
    assert!((muted.volume - 0.3).abs() < f32::EPSILON);
}

#[test]
fn test_tick_only_counts_in_deck_phase() {
    let welcome = PresentationState::new(total_slides());
    assert_eq!(welcome.apply(Event::Tick(Duration::from_secs(3))).elapsed_secs(), 0);

    let intro = welcome.apply(Event::Start { audio: false });
    assert_eq!(intro.apply(Event::Tick(Duration::from_secs(3))).elapsed_secs(), 0);

    let ticking = deck_state()
        .apply(Event::Tick(Duration::from_millis(700)))
        .apply(Event::Tick(Duration::from_millis(700)));
    assert_eq!(ticking.elapsed_secs(), 1);
}

struct FailingHost;

impl SessionHost for FailingHost {
    fn set_fullscreen(&mut self, _on: bool) -> Result<()> {
        Err(DeckError::PermissionDenied("fullscreen blocked".to_string()))
    }

    fn play_audio(&mut self) -> Result<()> {
        Err(DeckError::PermissionDenied("autoplay blocked".to_string()))
    }

    fn set_muted(&mut self, _muted: bool) -> Result<()> {
        Err(DeckError::PermissionDenied("no audio device".to_string()))
    }

    fn set_volume(&mut self, _volume: f32) -> Result<()> {
        Err(DeckError::PermissionDenied("no audio device".to_string()))
    }
}

#[test]
fn test_rejected_fullscreen_leaves_flag_unchanged() {
    let mut controller = Controller::new(FailingHost, total_slides());
    controller.start(true);
    controller.intro_finished();

    controller.handle_key(Key::F11);
    assert!(!controller.state().fullscreen);
    assert!(!controller.state().playing);

    // The controller stays usable after a rejection.
    controller.handle_key(Key::ArrowRight);
    assert_eq!(controller.state().current, 1);

    controller.handle_key(Key::KeyF);
    assert!(!controller.state().fullscreen);
}

#[test]
fn test_rejected_mute_leaves_audio_flag_unchanged() {
    let mut controller = Controller::new(FailingHost, total_slides());
    controller.start(false);
    controller.intro_finished();

    assert!(!controller.state().audio_enabled);
    controller.toggle_audio();
    assert!(!controller.state().audio_enabled);

    // Navigation still works after the rejection.
    controller.handle_key(Key::ArrowRight);
    assert_eq!(controller.state().current, 1);
}

#[test]
fn test_terminal_host_controller_walkthrough() {
    let mut controller = Controller::new(TerminalHost, total_slides());
    controller.start(true);
    controller.intro_finished();
    assert!(controller.state().playing);

    controller.handle_key(Key::Space);
    controller.handle_key(Key::End);
    assert_eq!(controller.state().current, total_slides() - 1);

    controller.handle_key(Key::F11);
    assert!(controller.state().fullscreen);
    controller.handle_key(Key::KeyF);
    assert!(!controller.state().fullscreen);

    // A cooperating host lets the audio flag flip both ways.
    assert!(controller.state().audio_enabled);
    controller.toggle_audio();
    assert!(!controller.state().audio_enabled);
    controller.toggle_audio();
    assert!(controller.state().audio_enabled);

    controller.set_volume(2.0);
    assert_eq!(controller.state().volume, 1.0);

    controller.handle_key(Key::Home);
    assert_eq!(controller.state().current, 0);
}

#[test]
fn test_text_row_line_format() {
    let row = ClinicRow {
        clinic: "SP Indianópolis",
        kind: "Tipo II",
        lta: "Sim",
        permit: "Sim",
        validity: "03/05/2026",
    };
    assert_eq!(
        row_line(&row),
        "SP Indianópolis - Tipo II - Aprovação LTA: Sim - Alvará: Sim - Validade: 03/05/2026"
    );
}

#[test]
fn test_text_transcript_content() {
    let transcript = text_transcript();

    assert!(transcript.starts_with("LEGALIZAÇÃO E INFRAESTRUTURA\n"));
    assert!(transcript.contains(
        "SP Indianópolis - Tipo II - Aprovação LTA: Sim - Alvará: Sim - Validade: 03/05/2026"
    ));

    // Empty validity drops the whole segment rather than leaving a dangling label.
    let porto_velho = transcript
        .lines()
        .find(|l| l.starts_with("Porto Velho"))
        .unwrap();
    assert!(!porto_velho.contains("Validade:"));
    assert!(porto_velho.ends_with("Alvará: Protocolo"));
}

#[test]
fn test_text_transcript_follows_slide_order() {
    let transcript = text_transcript();

    let services = transcript.find("SERVIÇOS DE RESPONSABILIDADE:").unwrap();
    let licensed = transcript.find("ALVARÁ SANITÁRIO:").unwrap();
    let difficulties = transcript.find("MAIORES DIFICULDADES:").unwrap();
    let pending = transcript.find("UNIDADES EM PROCESSO DE LIBERAÇÃO:").unwrap();
    let notes = transcript.find("OVERVIEW DE PROBLEMAS:").unwrap();

    assert!(services < licensed);
    assert!(licensed < difficulties);
    assert!(difficulties < pending);
    assert!(pending < notes);
}

#[test]
fn test_html_document_structure() {
    let html = html_document();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<html lang=\"pt-BR\">"));
    assert!(html.contains("<h3>Alvará Sanitário</h3>"));
    assert!(html.contains("<th>TIPO I OU II</th>"));

    // Statuses are plain labels in HTML, not colored badges.
    assert!(html.contains("<td>Protocolo</td>"));

    // An empty validity still produces an (empty) cell.
    let porto_velho = html
        .lines()
        .find(|l| l.contains("Porto Velho"))
        .unwrap();
    assert!(porto_velho.trim_end().ends_with("<td></td></tr>"));
}

#[test]
fn test_paragraphs_body_renders_in_every_text_format() {
    static TEXT: [&str; 2] = ["Primeiro parágrafo.", "Segundo parágrafo."];
    let slides = [Slide {
        title: "Observações",
        body: SlideBody::Paragraphs { text: &TEXT },
    }];

    let txt = String::from_utf8(render_deck(&slides, TextWriter::new()).unwrap()).unwrap();
    assert!(txt.contains("OBSERVAÇÕES:"));
    assert!(txt.contains("Segundo parágrafo."));

    let html =
        String::from_utf8(render_deck(&slides, export::html::HtmlWriter::new()).unwrap()).unwrap();
    assert!(html.contains("<p>Primeiro parágrafo.</p>"));
}

#[test]
fn test_export_format_parsing() {
    assert_eq!("pptx".parse::<ExportFormat>().unwrap(), ExportFormat::Pptx);
    assert_eq!("PowerPoint".parse::<ExportFormat>().unwrap(), ExportFormat::Pptx);
    assert_eq!("PDF".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
    assert_eq!("txt".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
    assert!("docx".parse::<ExportFormat>().is_err());

    assert_eq!(
        ExportFormat::Pptx.file_name(),
        "Legalizacao_Infraestrutura.pptx"
    );
    assert_eq!(
        ExportFormat::Text.file_name(),
        "Legalizacao_Infraestrutura.txt"
    );
}

#[test]
fn test_exports_are_deterministic() {
    let config = Config::new();

    for format in [ExportFormat::Text, ExportFormat::Html, ExportFormat::Pptx] {
        let first = render_to_bytes(deck(), format, &config).unwrap();
        let second = render_to_bytes(deck(), format, &config).unwrap();
        assert_eq!(first, second, "{:?} output must be byte-stable", format);
    }
}
