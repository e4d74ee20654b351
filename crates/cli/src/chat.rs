//! `finconsult chat` — interactive consultation REPL.
//!
//! Opens a readline-based loop that sends each line through the
//! conversation engine and prints the reply. Slash commands edit the
//! profile; any edit that changes the profile signature silently restarts
//! the conversation, which the REPL surfaces as a short notice.

use std::path::Path;
use std::sync::Arc;

use colored::Colorize;

use fc_catalog::strings::MessageKey;
use fc_catalog::{default_domains, domain_label, horizon_label, playbook, resolve, tone_label};
use fc_domain::config::ProviderConfig;
use fc_domain::{Config, Configuration, Horizon, KnowledgeDomain, Locale, Tone, UseCase};
use fc_ingest::{ingest_batch, model_sequence, IngestLimits, SourceFile};
use fc_providers::{resolve_api_key, ChatBackend, GeminiBackend};
use fc_sessions::ConversationContext;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// REPL state
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

struct ReplState {
    profile: Configuration,
    ctx: ConversationContext,
    /// Kept alongside the context so the ingestor can caption images.
    backend: Option<Arc<dyn ChatBackend>>,
    provider: ProviderConfig,
    limits: IngestLimits,
}

impl ReplState {
    fn tr(&self, key: MessageKey) -> &'static str {
        resolve(self.profile.locale, key)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Public entry point
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Run the interactive consultation REPL.
pub async fn chat(config: Config) -> anyhow::Result<()> {
    let mut state = ReplState {
        profile: config.assistant.clone(),
        ctx: ConversationContext::new(config.limits.memory_notes),
        backend: None,
        provider: config.provider.clone(),
        limits: IngestLimits::from(&config.limits),
    };

    // Resolve a credential up front when one is configured; otherwise the
    // REPL just refuses to send until /key supplies one.
    match resolve_api_key(&state.provider) {
        Ok(key) => {
            if let Err(e) = connect(&mut state, &key).await {
                eprintln!("{}", format!("could not connect: {e}").red());
            }
        }
        Err(e) => {
            tracing::debug!(error = %e, "no credential at startup");
        }
    }

    // Readline editor with persistent history.
    let history_path = dirs::home_dir()
        .unwrap_or_default()
        .join(".finconsult")
        .join("chat_history.txt");
    if let Some(parent) = history_path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    let mut rl = rustyline::DefaultEditor::new()?;
    let _ = rl.load_history(&history_path);

    print_banner(&state);

    loop {
        let readline = rl.readline("you> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                rl.add_history_entry(&line).ok();

                // ── Slash commands ────────────────────────────────
                if trimmed.starts_with('/') {
                    if handle_command(trimmed, &mut state).await {
                        break;
                    }
                    continue;
                }

                // ── User message → consultation turn ─────────────
                if !state.ctx.has_credential() {
                    eprintln!("{}", state.tr(MessageKey::NeedApiKey).yellow());
                    continue;
                }

                match state.ctx.send_turn(&state.profile, trimmed).await {
                    Ok(Some(outcome)) => {
                        if outcome.ok {
                            println!("{}", outcome.reply);
                        } else {
                            eprintln!("{}", outcome.reply.red());
                        }
                        println!();
                    }
                    Ok(None) => {}
                    Err(e) => eprintln!("{}", format!("error: {e}").red()),
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                eprintln!("(Use Ctrl+D or /exit to quit)");
                continue;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                break;
            }
            Err(e) => {
                eprintln!("{}", format!("readline error: {e}").red());
                break;
            }
        }
    }

    rl.save_history(&history_path).ok();
    eprintln!("Goodbye!");
    Ok(())
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Connection helpers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

async fn connect(state: &mut ReplState, key: &str) -> fc_domain::Result<()> {
    let backend: Arc<dyn ChatBackend> = Arc::new(GeminiBackend::new(key, &state.provider)?);
    state
        .ctx
        .set_credential(key, backend.clone(), &state.profile)
        .await?;
    state.backend = Some(backend);
    Ok(())
}

/// Re-check the session against the edited profile; called after every
/// profile-mutating command so the implicit reset is surfaced promptly.
async fn resync(state: &mut ReplState) {
    if !state.ctx.has_credential() {
        return;
    }
    match state.ctx.sync_profile(&state.profile).await {
        Ok(true) => eprintln!("{}", "(conversation reset: profile changed)".dimmed()),
        Ok(false) => {}
        Err(e) => eprintln!("{}", format!("error: {e}").red()),
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Slash command handling
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Process a slash command. Returns `true` if the REPL should exit.
async fn handle_command(input: &str, state: &mut ReplState) -> bool {
    let parts: Vec<&str> = input.splitn(2, ' ').collect();
    let cmd = parts[0];
    let arg = parts.get(1).map(|s| s.trim()).filter(|s| !s.is_empty());

    match cmd {
        "/exit" | "/quit" => return true,

        "/key" => {
            eprint!("API key: ");
            match rpassword::read_password() {
                Ok(key) if !key.trim().is_empty() => {
                    match connect(state, key.trim()).await {
                        Ok(()) => eprintln!("Credential set; conversation restarted."),
                        Err(e) => eprintln!("{}", format!("error: {e}").red()),
                    }
                }
                Ok(_) => eprintln!("(no key entered)"),
                Err(e) => eprintln!("{}", format!("error: {e}").red()),
            }
        }

        "/model" => {
            match arg {
                Some(name) => {
                    if !state.provider.model_options.iter().any(|m| m == name) {
                        eprintln!("{}", format!("note: '{name}' is not in model_options").yellow());
                    }
                    state.profile.model_id = name.to_string();
                    eprintln!("Model set to: {name}");
                    resync(state).await;
                }
                None => {
                    eprintln!("Current model: {}", state.profile.model_id);
                    eprintln!("Available: {}", state.provider.model_options.join(", "));
                    eprintln!("Usage: /model <name>");
                }
            }
        }

        "/usecase" => {
            match arg.and_then(UseCase::parse) {
                Some(use_case) => {
                    state.profile.use_case = use_case;
                    // Switching playbooks re-seeds the selected domains.
                    state.profile.knowledge_domains = default_domains(use_case).to_vec();
                    let title = playbook(use_case, state.profile.locale).title;
                    eprintln!("Use case set to: {title}");
                    resync(state).await;
                }
                None => {
                    eprintln!("Use cases:");
                    for &use_case in UseCase::ALL {
                        eprintln!(
                            "  {:<22} {}",
                            use_case.id(),
                            playbook(use_case, state.profile.locale).title
                        );
                    }
                    eprintln!("Usage: /usecase <id>");
                }
            }
        }

        "/tone" => {
            match arg.and_then(Tone::parse) {
                Some(tone) => {
                    state.profile.tone = tone;
                    eprintln!("Tone set to: {}", tone_label(state.profile.locale, tone));
                    resync(state).await;
                }
                None => {
                    let ids: Vec<&str> = Tone::ALL.iter().map(|t| t.id()).collect();
                    eprintln!("Tones: {}", ids.join(", "));
                    eprintln!("Usage: /tone <id>");
                }
            }
        }

        "/risk" => {
            match arg.and_then(|a| a.parse::<u8>().ok()).filter(|r| (1..=5).contains(r)) {
                Some(level) => {
                    state.profile.risk_level = level;
                    eprintln!("Risk appetite set to: {level}");
                    resync(state).await;
                }
                None => {
                    eprintln!("Current risk appetite: {}", state.profile.risk_level);
                    eprintln!("Usage: /risk <1-5>  (1 = very cautious, 5 = aggressive growth)");
                }
            }
        }

        "/creativity" => {
            match arg.and_then(|a| a.parse::<f32>().ok()).filter(|c| (0.0..=1.0).contains(c)) {
                Some(value) => {
                    state.profile.creativity = value;
                    eprintln!("Creativity bias set to: {value:.2}");
                    resync(state).await;
                }
                None => {
                    eprintln!("Current creativity bias: {:.2}", state.profile.creativity);
                    eprintln!("Usage: /creativity <0.0-1.0>");
                }
            }
        }

        "/horizon" => {
            match arg.and_then(Horizon::parse) {
                Some(horizon) => {
                    state.profile.horizon = horizon;
                    eprintln!(
                        "Planning horizon set to: {}",
                        horizon_label(state.profile.locale, horizon)
                    );
                    resync(state).await;
                }
                None => {
                    let ids: Vec<&str> = Horizon::ALL.iter().map(|h| h.id()).collect();
                    eprintln!("Horizons: {}", ids.join(", "));
                    eprintln!("Usage: /horizon <id>");
                }
            }
        }

        "/locale" => {
            match arg.and_then(Locale::parse) {
                Some(locale) => {
                    state.profile.locale = locale;
                    eprintln!("Locale set to: {}", locale.id());
                    resync(state).await;
                }
                None => {
                    eprintln!("Locales: en, id");
                    eprintln!("Usage: /locale <id>");
                }
            }
        }

        "/domains" => {
            match arg {
                Some("none") => {
                    state.profile.knowledge_domains.clear();
                    eprintln!("Knowledge modules cleared (generic guidance).");
                    resync(state).await;
                }
                Some(list) => {
                    let mut selected = Vec::new();
                    let mut unknown = Vec::new();
                    for token in list.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                        match KnowledgeDomain::parse(token) {
                            Some(domain) if !selected.contains(&domain) => selected.push(domain),
                            Some(_) => {}
                            None => unknown.push(token.to_string()),
                        }
                    }
                    if !unknown.is_empty() {
                        eprintln!("{}", format!("unknown domains: {}", unknown.join(", ")).red());
                    } else {
                        state.profile.knowledge_domains = selected;
                        eprintln!("Knowledge modules set.");
                        resync(state).await;
                    }
                }
                None => {
                    eprintln!("Selected: {}", domain_list(&state.profile));
                    let ids: Vec<&str> = KnowledgeDomain::ALL.iter().map(|d| d.id()).collect();
                    eprintln!("Available: {}", ids.join(", "));
                    eprintln!("Usage: /domains <id,id,...>  or  /domains none");
                }
            }
        }

        "/actions" => {
            if toggle(arg, &mut state.profile.include_actions, "Action checklist") {
                resync(state).await;
            }
        }
        "/disclaimer" => {
            if toggle(arg, &mut state.profile.include_disclaimer, "Compliance reminder") {
                resync(state).await;
            }
        }

        "/memory" => {
            match arg {
                Some("on") => {
                    state.profile.memory_enabled = true;
                    eprintln!("Session memory {}", state.tr(MessageKey::StatusEnabled));
                }
                Some("off") => {
                    state.profile.memory_enabled = false;
                    eprintln!("Session memory {}", state.tr(MessageKey::StatusDisabled));
                }
                _ => {
                    let status = if state.profile.memory_enabled {
                        state.tr(MessageKey::StatusEnabled)
                    } else {
                        state.tr(MessageKey::StatusDisabled)
                    };
                    eprintln!("Session memory: {status}");
                    for note in state.ctx.memory_notes() {
                        eprintln!("  - {note}");
                    }
                }
            }
            if matches!(arg, Some("on") | Some("off")) {
                resync(state).await;
            }
        }

        "/attach" => {
            match arg {
                Some(paths) => attach(state, paths).await,
                None => eprintln!("Usage: /attach <path> [path ...]"),
            }
        }

        "/docs" => {
            match arg {
                Some("clear") => {
                    state.ctx.clear_documents();
                    eprintln!("Document context cleared.");
                }
                _ => print_documents(state),
            }
        }

        "/profile" => print_profile(state),
        "/samples" => print_samples(state),
        "/transcript" => print_transcript(state),

        "/reset" => {
            state.ctx.reset();
            state.profile.knowledge_domains =
                default_domains(state.profile.use_case).to_vec();
            eprintln!("Conversation reset.");
        }

        "/help" => {
            eprintln!("Commands:");
            eprintln!("  /key                 Set the API key (hidden input)");
            eprintln!("  /model <name>        Select the chat model");
            eprintln!("  /usecase <id>        Switch the consultation playbook");
            eprintln!("  /tone <id>           Language style");
            eprintln!("  /domains <id,...>    Knowledge modules ('none' to clear)");
            eprintln!("  /risk <1-5>          Risk appetite");
            eprintln!("  /creativity <0-1>    Creativity bias");
            eprintln!("  /horizon <id>        Planning horizon");
            eprintln!("  /locale <en|id>      Reply language");
            eprintln!("  /actions on|off      Include actionable checklist");
            eprintln!("  /disclaimer on|off   Include compliance reminder");
            eprintln!("  /memory on|off       Session memory (no arg: snapshot)");
            eprintln!("  /attach <paths>      Upload reference documents");
            eprintln!("  /docs [clear]        Show or clear document context");
            eprintln!("  /profile             Current configuration");
            eprintln!("  /samples             Focus areas and sample prompts");
            eprintln!("  /transcript          Replay the conversation so far");
            eprintln!("  /reset               Reset the conversation");
            eprintln!("  /exit, /quit         Exit");
        }

        other => {
            eprintln!("Unknown command: {other}  (type /help for a list)");
        }
    }

    false
}

/// Returns `true` when the flag was actually set (not just queried).
fn toggle(arg: Option<&str>, flag: &mut bool, label: &str) -> bool {
    let set = match arg {
        Some("on") => {
            *flag = true;
            true
        }
        Some("off") => {
            *flag = false;
            true
        }
        _ => false,
    };
    eprintln!("{label}: {}", if *flag { "on" } else { "off" });
    set
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Document attachment
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

async fn attach(state: &mut ReplState, paths: &str) {
    let mut sources = Vec::new();
    let mut errors = Vec::new();

    for path in paths.split_whitespace() {
        match SourceFile::from_path(Path::new(path)) {
            Ok(source) => sources.push(source),
            Err(e) => errors.push(format!("{path}: {e}")),
        }
    }

    let caption_models = model_sequence(
        &state.provider.caption_model,
        Some(&state.profile.model_id),
        &state.provider.caption_fallback_model,
    );
    let mut outcome = ingest_batch(
        &sources,
        state.backend.as_deref(),
        &caption_models,
        &state.limits,
    )
    .await;
    outcome.errors.extend(errors);

    for error in &outcome.errors {
        eprintln!("{}", error.red());
    }
    eprintln!(
        "Attached {} document(s), {} error(s).",
        outcome.documents.len(),
        outcome.errors.len()
    );

    // The new batch replaces the old one wholesale.
    state.ctx.set_documents(outcome.documents, outcome.errors);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Display helpers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn print_banner(state: &ReplState) {
    let case = playbook(state.profile.use_case, state.profile.locale);
    eprintln!("{}", "FinConsult".bold());
    eprintln!("{}", case.title.bold());
    eprintln!("{}", case.tagline);
    eprintln!("Type /help for commands, Ctrl+D to exit");
    if !state.ctx.has_credential() {
        eprintln!("{}", state.tr(MessageKey::NeedApiKey).yellow());
    }
    eprintln!();
}

fn domain_list(profile: &Configuration) -> String {
    if profile.knowledge_domains.is_empty() {
        resolve(profile.locale, MessageKey::DefaultKnowledge).to_string()
    } else {
        profile
            .knowledge_domains
            .iter()
            .map(|d| domain_label(profile.locale, *d))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn print_profile(state: &ReplState) {
    let profile = &state.profile;
    let memory_status = if profile.memory_enabled {
        state.tr(MessageKey::StatusEnabled)
    } else {
        state.tr(MessageKey::StatusDisabled)
    };

    eprintln!("{}", state.tr(MessageKey::ConfigHeading).bold());
    eprintln!("- {}: {}", state.tr(MessageKey::ConfigModel), profile.model_id);
    eprintln!(
        "- {}: {}",
        state.tr(MessageKey::ConfigTone),
        tone_label(profile.locale, profile.tone)
    );
    eprintln!(
        "- {}: {}",
        state.tr(MessageKey::ConfigDomains),
        domain_list(profile)
    );
    eprintln!(
        "- {}: {}",
        state.tr(MessageKey::ConfigRisk),
        profile.risk_level
    );
    eprintln!(
        "- {}: {}",
        state.tr(MessageKey::ConfigHorizon),
        horizon_label(profile.locale, profile.horizon)
    );
    eprintln!("- {}: {memory_status}", state.tr(MessageKey::ConfigMemory));
}

fn print_samples(state: &ReplState) {
    let case = playbook(state.profile.use_case, state.profile.locale);

    eprintln!("{}", state.tr(MessageKey::FocusHeading).bold());
    for item in case.focus {
        eprintln!("- {item}");
    }
    eprintln!();
    eprintln!("{}", state.tr(MessageKey::SamplesHeading).bold());
    for prompt in case.sample_prompts {
        eprintln!("- {}", prompt.italic());
    }
}

fn print_transcript(state: &ReplState) {
    if state.ctx.transcript().is_empty() {
        eprintln!("(transcript is empty)");
        return;
    }
    for turn in state.ctx.transcript().turns() {
        eprintln!("{}:", turn.role.as_str().bold());
        eprintln!("{}", turn.content);
        eprintln!();
    }
}

fn print_documents(state: &ReplState) {
    if state.ctx.documents().is_empty() && state.ctx.document_errors().is_empty() {
        eprintln!("(no documents attached)");
        return;
    }

    for doc in state.ctx.documents() {
        let mut meta = format!(
            "{} · {} {}",
            doc.name.bold(),
            doc.char_count,
            state.tr(MessageKey::CharactersLabel)
        );
        if doc.truncated {
            meta.push_str(state.tr(MessageKey::TruncatedSuffix));
        }
        eprintln!("{meta}");
        eprintln!("{}", doc.preview.dimmed());
        eprintln!();
    }
    for error in state.ctx.document_errors() {
        eprintln!("{}", error.red());
    }
}
