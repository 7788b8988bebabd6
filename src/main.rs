use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ransomshield::phishing::PhishingScorer;
use ransomshield::session::SessionState;
use ransomshield::simulation::{
    audit_log, breach, chatbot, encryption, inbox, kill_chain, lab, network, ransom_note, terminal,
};
use ransomshield::statistics::StatsStore;
use ransomshield::verdict::LikelihoodTier;
use ransomshield::Config;
use std::io::{self, BufRead, Read, Write};
use std::path::Path;
use std::process;
use std::time::Duration;

const SAFETY_REMINDER: &str = "Safety reminder: This is a training simulator. It does not modify files or perform any real encryption or network activity.";

fn build_cli() -> Command {
    Command::new("ransomshield")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Safe ransomware awareness simulator with a rule-based phishing detector")
        .long_about("RansomShield - an educational simulator for ransomware awareness training:\n\
                    • Rule-based phishing likelihood detector\n\
                    • Fake file encryption, terminal output and ransom notes (names only)\n\
                    • Kill chain walkthrough, network spread and audit log demos\n\
                    • Phishing inbox quiz, incident response chatbot and breach cost calculator\n\
                    Nothing here opens, encrypts or transmits real files.")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value("ransomshield.yaml")
                .global(true),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Generate a default configuration file")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("scan")
                .about("Score an email (headers + body) for phishing likelihood")
                .arg(
                    Arg::new("text")
                        .long("text")
                        .value_name("TEXT")
                        .help("Email content to scan")
                        .conflicts_with("file"),
                )
                .arg(
                    Arg::new("file")
                        .short('f')
                        .long("file")
                        .value_name("FILE")
                        .help("Read email content from a file (default: stdin)"),
                )
                .arg(
                    Arg::new("rules")
                        .long("rules")
                        .value_name("FILE")
                        .help("YAML scoring rule table overriding the configured one"),
                )
                .arg(
                    Arg::new("explain")
                        .long("explain")
                        .help("Show which rules contributed to the score")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("encrypt")
                .about("Fake-encrypt a list of file names (files are never opened)")
                .arg(
                    Arg::new("names")
                        .value_name("NAME")
                        .help("File names to show being encrypted")
                        .required(true)
                        .num_args(1..),
                )
                .arg(
                    Arg::new("show-note")
                        .long("show-note")
                        .help("Print the generated ransom note afterwards")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("kill-chain")
                .about("Walk through the stages of a typical ransomware kill chain")
                .arg(
                    Arg::new("details")
                        .long("details")
                        .help("Append explanatory notes")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("terminal")
                .about("Show simulated ransomware command-line output")
                .arg(
                    Arg::new("targets")
                        .value_name("NAME")
                        .help("File names the fake malware 'finds'")
                        .num_args(0..),
                ),
        )
        .subcommand(
            Command::new("ransom-note")
                .about("Generate a simulated ransom note")
                .arg(
                    Arg::new("family")
                        .long("family")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            ransom_note::FAMILIES.iter().copied(),
                        ))
                        .default_value(ransom_note::DEFAULT_FAMILY),
                )
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .default_value(ransom_note::DEFAULT_AMOUNT),
                )
                .arg(
                    Arg::new("target")
                        .long("target")
                        .value_name("NAME")
                        .help("File name to list in the note (repeatable)")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("FILE")
                        .help("Also save the note to a file"),
                ),
        )
        .subcommand(
            Command::new("chat")
                .about("Ask the incident response chatbot for guidance")
                .arg(
                    Arg::new("message")
                        .short('m')
                        .long("message")
                        .value_name("TEXT")
                        .help("Single question (default: read questions from stdin)"),
                ),
        )
        .subcommand(
            Command::new("audit-logs")
                .about("Generate fake SOC-style audit log lines")
                .arg(
                    Arg::new("count")
                        .short('n')
                        .long("count")
                        .value_parser(clap::value_parser!(u64).range(
                            audit_log::MIN_ENTRIES as u64..=audit_log::MAX_ENTRIES as u64,
                        ))
                        .default_value("12"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_parser(clap::value_parser!(u64))
                        .help("Seed for reproducible output"),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("FILE")
                        .help("Also save the log lines to a file"),
                ),
        )
        .subcommand(
            Command::new("inbox")
                .about("Practice spotting phishing in a simulated inbox (reads commands from stdin)")
                .arg(
                    Arg::new("heuristics")
                        .long("heuristics")
                        .help("Show what the rule-based detector thinks of each mail")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("network")
                .about("Simulate infection spreading across a random network")
                .arg(
                    Arg::new("nodes")
                        .long("nodes")
                        .value_parser(clap::value_parser!(u64).range(
                            *network::NODE_RANGE.start() as u64..=*network::NODE_RANGE.end() as u64,
                        ))
                        .default_value("12"),
                )
                .arg(
                    Arg::new("start")
                        .long("start")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("0")
                        .help("Index of the first infected node"),
                )
                .arg(
                    Arg::new("probability")
                        .long("probability")
                        .value_parser(clap::value_parser!(f64))
                        .default_value("0.35")
                        .help("Spread probability per edge"),
                )
                .arg(
                    Arg::new("steps")
                        .long("steps")
                        .value_parser(clap::value_parser!(u64).range(
                            *network::STEP_RANGE.start() as u64..=*network::STEP_RANGE.end() as u64,
                        ))
                        .default_value("6"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_parser(clap::value_parser!(u64))
                        .help("Seed for reproducible spread"),
                ),
        )
        .subcommand(
            Command::new("breach")
                .about("Estimate the financial impact of a simulated incident (INR)")
                .arg(
                    Arg::new("employees")
                        .long("employees")
                        .value_parser(clap::value_parser!(u64).range(1..))
                        .default_value("50"),
                )
                .arg(
                    Arg::new("salary")
                        .long("salary")
                        .value_parser(clap::value_parser!(f64))
                        .default_value("40000")
                        .help("Average monthly salary"),
                )
                .arg(
                    Arg::new("downtime")
                        .long("downtime")
                        .value_parser(clap::value_parser!(u64).range(1..))
                        .default_value("24")
                        .help("Estimated downtime in hours"),
                )
                .arg(
                    Arg::new("records")
                        .long("records")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("10000")
                        .help("Number of sensitive records"),
                )
                .arg(
                    Arg::new("ransom")
                        .long("ransom")
                        .value_parser(clap::value_parser!(f64))
                        .default_value("2000000")
                        .help("Expected ransom"),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("FILE")
                        .help("Save the estimate as plain text"),
                ),
        )
        .subcommand(
            Command::new("lab")
                .about("List educational media in the assets directory")
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .value_name("DIR")
                        .help("Assets directory (default from configuration)"),
                ),
        )
        .subcommand(
            Command::new("stats")
                .about("Show or reset session analytics")
                .arg(
                    Arg::new("reset")
                        .long("reset")
                        .help("Reset analytics and exit")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("logs")
                        .long("logs")
                        .value_name("N")
                        .value_parser(clap::value_parser!(u64))
                        .help("Show the N most recent activity log entries"),
                ),
        )
}

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Some(generate_path) = matches.get_one::<String>("generate-config") {
        generate_default_config(generate_path);
        return;
    }

    let config_path = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or("ransomshield.yaml");

    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            process::exit(1);
        }
    };

    let scorer = match PhishingScorer::new(config.scoring.clone()) {
        Ok(scorer) => scorer,
        Err(e) => {
            eprintln!("❌ Invalid scoring configuration: {e}");
            process::exit(1);
        }
    };

    let store = match config.enabled_statistics() {
        Some(stats_config) => match StatsStore::open(&stats_config.database_path) {
            Ok(store) => Some(store),
            Err(e) => {
                eprintln!("❌ Failed to access statistics database: {e:#}");
                process::exit(1);
            }
        },
        None => None,
    };

    let mut session = match store.as_ref().map(StatsStore::latest_analytics) {
        Some(Ok(Some(analytics))) => SessionState::with_analytics(analytics),
        Some(Err(e)) => {
            log::warn!("Could not load saved analytics, starting fresh: {e:#}");
            SessionState::new()
        }
        _ => SessionState::new(),
    };

    let app = App {
        config: &config,
        scorer: &scorer,
        store: store.as_ref(),
    };

    let command = matches.subcommand_name().unwrap_or("home").to_string();
    let result = match matches.subcommand() {
        Some(("scan", sub)) => app.scan(&mut session, sub),
        Some(("encrypt", sub)) => app.encrypt(&mut session, sub).await,
        Some(("kill-chain", sub)) => app.kill_chain(sub).await,
        Some(("terminal", sub)) => app.terminal(&session, sub).await,
        Some(("ransom-note", sub)) => app.ransom_note(&mut session, sub),
        Some(("chat", sub)) => app.chat(&mut session, sub),
        Some(("audit-logs", sub)) => app.audit_logs(sub),
        Some(("inbox", sub)) => app.inbox(&mut session, sub),
        Some(("network", sub)) => app.network(sub).await,
        Some(("breach", sub)) => app.breach(sub),
        Some(("lab", sub)) => app.lab(sub),
        Some(("stats", sub)) => app.stats(&mut session, sub),
        _ => {
            app.home(&session);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("❌ {e:#}");
        process::exit(1);
    }

    if let Some(store) = store.as_ref() {
        let persisted = store
            .save_analytics(&session.analytics)
            .and_then(|_| store.append_log(&format!("command: {command}")));
        if let Err(e) = persisted {
            log::error!("Failed to persist analytics: {e:#}");
        }
    }
}

fn load_config(path: &str) -> anyhow::Result<Config> {
    if Path::new(path).exists() {
        Config::from_file(path)
    } else {
        log::debug!("Configuration file '{path}' not found, using default configuration");
        Ok(Config::default())
    }
}

fn generate_default_config(path: &str) {
    let config = Config::default();
    match config.to_file(path) {
        Ok(()) => {
            println!("Default configuration written to: {path}");
            println!("Please edit the configuration file to suit your needs.");
        }
        Err(e) => {
            eprintln!("Error writing configuration file: {e}");
            process::exit(1);
        }
    }
}

fn millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

fn rng_from(seed: Option<&u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_entropy(),
    }
}

fn save_text(path: &str, content: &str) -> anyhow::Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write {path}"))?;
    println!("💾 Saved to {path}");
    Ok(())
}

struct App<'a> {
    config: &'a Config,
    scorer: &'a PhishingScorer,
    store: Option<&'a StatsStore>,
}

impl App<'_> {
    fn home(&self, session: &SessionState) {
        println!("🛡️  RansomShield — Enhanced Simulator");
        println!("Safe educational simulator demonstrating ransomware behaviour and defenses.");
        println!("═══════════════════════════════════════");
        println!("Quick actions:");
        println!("  • encrypt     upload-style fake encryption of file names");
        println!("  • kill-chain  learn the attack steps");
        println!("  • scan        check an email with the phishing detector");
        println!("  • inbox       practice phishing identification");
        println!("  • breach      estimate the impact of an incident");
        println!();
        println!("Simulations run: {}", session.analytics.simulations_run);
        println!("Phishing checks: {}", session.analytics.phishing_checks);
        println!();
        println!("{SAFETY_REMINDER}");
    }

    fn scan(&self, session: &mut SessionState, args: &ArgMatches) -> anyhow::Result<()> {
        let text = if let Some(text) = args.get_one::<String>("text") {
            text.clone()
        } else if let Some(file) = args.get_one::<String>("file") {
            let bytes = std::fs::read(file)
                .with_context(|| format!("Failed to read email file: {file}"))?;
            String::from_utf8_lossy(&bytes).into_owned()
        } else {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("Failed to read email content from stdin")?;
            String::from_utf8_lossy(&buffer).into_owned()
        };

        let custom_scorer = match args.get_one::<String>("rules") {
            Some(path) => Some(
                PhishingScorer::load_from_file(path)
                    .map_err(|e| anyhow::anyhow!("Failed to load scoring rules {path}: {e}"))?,
            ),
            None => None,
        };
        let scorer = custom_scorer.as_ref().unwrap_or(self.scorer);

        let breakdown = scorer.analyze(&text);
        session.record_phishing_check();

        let tier = LikelihoodTier::from_score(breakdown.percentage);
        println!("Phishing likelihood score: {}%", breakdown.percentage);
        println!("{} {}", tier.icon(), tier.message());

        if args.get_flag("explain") {
            println!();
            println!(
                "Raw score: {} / {}",
                breakdown.raw_score,
                scorer.config().max_score
            );
            if breakdown.contributions.is_empty() {
                println!("  No rule matched");
            }
            for contribution in &breakdown.contributions {
                println!("  +{} {}", contribution.points, contribution.rule.name());
                for evidence in &contribution.evidence {
                    println!("      {evidence}");
                }
            }
        }
        Ok(())
    }

    async fn encrypt(&self, session: &mut SessionState, args: &ArgMatches) -> anyhow::Result<()> {
        let names: Vec<String> = args
            .get_many::<String>("names")
            .map(|v| v.cloned().collect())
            .unwrap_or_default();

        println!("⚠️  Simulation only — files are not opened. Showing names and simulating progress.");
        let tick = millis(self.config.simulation.encryption_tick_ms);
        encryption::simulate_upload(session, &names, tick, |event| match event {
            encryption::ProgressEvent::Started { file } => println!("Encrypting: {file}"),
            encryption::ProgressEvent::Progress { percent, .. } => {
                let filled = percent as usize / 5;
                print!("\r  [{:<20}] {:>3}%", "#".repeat(filled), percent);
                let _ = io::stdout().flush();
            }
            encryption::ProgressEvent::Locked { locked_name, .. } => {
                println!();
                println!("  {locked_name} — 🔒 Encrypted (simulated)");
            }
        })
        .await?;

        if args.get_flag("show-note") {
            println!();
            println!("{}", session.ransom_note);
        }
        println!();
        println!("{SAFETY_REMINDER}");
        Ok(())
    }

    async fn kill_chain(&self, args: &ArgMatches) -> anyhow::Result<()> {
        println!("Kill Chain Demonstration");
        println!("═══════════════════════════════════════");
        let delay = millis(self.config.simulation.kill_chain_stage_ms);
        kill_chain::play(delay, args.get_flag("details"), |frame| println!("{frame}")).await;
        Ok(())
    }

    async fn terminal(&self, session: &SessionState, args: &ArgMatches) -> anyhow::Result<()> {
        let mut targets: Vec<String> = args
            .get_many::<String>("targets")
            .map(|v| v.cloned().collect())
            .unwrap_or_default();
        if targets.is_empty() {
            targets = session.files.iter().map(|f| f.original.clone()).collect();
        }
        if targets.is_empty() {
            targets = terminal::DEFAULT_TARGETS.iter().map(|t| t.to_string()).collect();
        }

        println!("Terminal — Simulated Ransomware Output");
        let sim = &self.config.simulation;
        terminal::play(
            &targets,
            millis(sim.terminal_scan_ms),
            millis(sim.terminal_encrypt_ms),
            |line| println!("$ {line}"),
        )
        .await;
        Ok(())
    }

    fn ransom_note(&self, session: &mut SessionState, args: &ArgMatches) -> anyhow::Result<()> {
        let family = args
            .get_one::<String>("family")
            .map(String::as_str)
            .unwrap_or(ransom_note::DEFAULT_FAMILY);
        let amount = args
            .get_one::<String>("amount")
            .map(String::as_str)
            .unwrap_or(ransom_note::DEFAULT_AMOUNT);
        let listed = args
            .get_many::<String>("target")
            .map(|v| v.cloned().collect::<Vec<_>>().join("\n"))
            .unwrap_or_default();

        let targets = ransom_note::note_targets(&listed, session);
        let note = ransom_note::generate_note(&targets, family, amount);
        println!("Preview (simulation)");
        println!("───────────────────────────────────────");
        println!("{note}");
        session.ransom_note = note.clone();

        if let Some(path) = args.get_one::<String>("output") {
            save_text(path, &note)?;
        }
        Ok(())
    }

    fn chat(&self, session: &mut SessionState, args: &ArgMatches) -> anyhow::Result<()> {
        if let Some(message) = args.get_one::<String>("message") {
            println!("{}", chatbot::ask(session, message));
            return Ok(());
        }

        println!("Incident Response Chatbot — describe the issue (Ctrl-D to finish)");
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read from stdin")?;
            let question = line.trim();
            if question.is_empty() {
                continue;
            }
            let answer = chatbot::ask(session, question);
            println!("You: {question}");
            println!("Bot: {answer}");
            println!();
        }
        log::debug!("Chat session ended after {} question(s)", session.chat.len());
        Ok(())
    }

    fn audit_logs(&self, args: &ArgMatches) -> anyhow::Result<()> {
        let count = args
            .get_one::<u64>("count")
            .copied()
            .unwrap_or(audit_log::DEFAULT_ENTRIES as u64) as usize;
        let mut rng = rng_from(args.get_one::<u64>("seed"));
        let now = chrono::Local::now().naive_local();

        let logs = audit_log::generate_audit_logs(count, &mut rng, now).join("\n");
        println!("{logs}");

        if let Some(path) = args.get_one::<String>("output") {
            save_text(path, &logs)?;
        }
        Ok(())
    }

    fn inbox(&self, session: &mut SessionState, args: &ArgMatches) -> anyhow::Result<()> {
        if args.get_flag("heuristics") {
            println!("📬 Detector view of the sample inbox");
            for (id, pct) in inbox::heuristic_scores(self.scorer) {
                if let Some(mail) = inbox::find(id) {
                    let tier = LikelihoodTier::from_score(pct);
                    println!("  #{id} {:>3}% {} {}", pct, tier.icon(), mail.subject);
                }
            }
            return Ok(());
        }

        print_inbox();
        println!("Commands: open <id> | mark <id> phishing|safe | score | list | quit");

        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read from stdin")?;
            let parts: Vec<&str> = line.split_whitespace().collect();
            match parts.as_slice() {
                [] => continue,
                ["quit"] | ["exit"] => break,
                ["list"] => print_inbox(),
                ["score"] => println!("Score: {}", inbox::score_display(session)),
                ["open", id] => match id.parse::<u32>() {
                    Ok(id) => {
                        let mail = inbox::open(session, id);
                        println!("From: {}", mail.from);
                        println!("Subject: {}", mail.subject);
                        println!("{}", mail.body);
                    }
                    Err(_) => println!("Not a mail id: {id}"),
                },
                ["mark", id, verdict] => {
                    let marked_phishing = match *verdict {
                        "phishing" | "phish" => true,
                        "safe" => false,
                        other => {
                            println!("Mark must be 'phishing' or 'safe', got '{other}'");
                            continue;
                        }
                    };
                    let id: u32 = match id.parse() {
                        Ok(id) => id,
                        Err(_) => {
                            println!("Not a mail id: {id}");
                            continue;
                        }
                    };
                    match inbox::mark(session, id, marked_phishing) {
                        Ok(true) => println!("✅ Correct"),
                        Ok(false) => println!("❌ Incorrect"),
                        Err(e) => println!("{e}"),
                    }
                    println!("Score: {}", inbox::score_display(session));
                }
                _ => println!("Unknown command: {line}"),
            }
        }

        println!("Final score: {}", inbox::score_display(session));
        println!("Hints: {}", inbox::HINTS);
        Ok(())
    }

    async fn network(&self, args: &ArgMatches) -> anyhow::Result<()> {
        let params = network::NetworkParams {
            nodes: args.get_one::<u64>("nodes").copied().unwrap_or(12) as usize,
            seed_node: args.get_one::<u64>("start").copied().unwrap_or(0) as usize,
            spread_probability: args.get_one::<f64>("probability").copied().unwrap_or(0.35),
            steps: args.get_one::<u64>("steps").copied().unwrap_or(6) as usize,
        };
        let mut rng = rng_from(args.get_one::<u64>("seed"));
        let sim = network::simulate(&params, &mut rng)?;

        println!("Network Map — Infection Spread Demo");
        println!("═══════════════════════════════════════");
        for node in 0..sim.network.node_count() {
            let neighbors: Vec<String> = sim
                .network
                .neighbors(node)
                .iter()
                .map(|n| n.to_string())
                .collect();
            println!("  {:>2} ─ {}", node, neighbors.join(", "));
        }
        println!();

        let delay = millis(self.config.simulation.network_step_ms);
        for step in &sim.steps {
            let map: String = (0..params.nodes)
                .map(|n| if step.infected.contains(&n) { '●' } else { '○' })
                .collect();
            println!(
                "Step {:>2}: {} {}/{} infected",
                step.step,
                map,
                step.infected.len(),
                params.nodes
            );
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }
        println!("Simulation complete — infected nodes shown as ●.");
        Ok(())
    }

    fn breach(&self, args: &ArgMatches) -> anyhow::Result<()> {
        let inputs = breach::BreachInputs {
            employees: args.get_one::<u64>("employees").copied().unwrap_or(50),
            avg_monthly_salary: args.get_one::<f64>("salary").copied().unwrap_or(40_000.0),
            downtime_hours: args.get_one::<u64>("downtime").copied().unwrap_or(24),
            data_records: args.get_one::<u64>("records").copied().unwrap_or(10_000),
            ransom_expected: args.get_one::<f64>("ransom").copied().unwrap_or(2_000_000.0),
        };
        let estimate = breach::estimate(&inputs)?;

        println!("Estimated Cost Breakdown (INR)");
        for line in breach::breakdown_lines(&estimate) {
            println!("{line}");
        }

        if let Some(path) = args.get_one::<String>("output") {
            let now = chrono::Local::now().naive_local();
            save_text(path, &breach::summary(&inputs, &estimate, now))?;
        }
        Ok(())
    }

    fn lab(&self, args: &ArgMatches) -> anyhow::Result<()> {
        let dir = args
            .get_one::<String>("dir")
            .cloned()
            .unwrap_or_else(|| self.config.simulation.assets_dir.clone());

        println!("Attack Lab — Educational Media ({dir}/)");
        let media = lab::list_media(Path::new(&dir))?;
        if media.is_empty() {
            println!("No local media found. Place files such as:");
            for suggestion in lab::SUGGESTED_FILES {
                println!("  • {suggestion}");
            }
        } else {
            for path in media {
                println!("  🎬 {}", path.display());
            }
        }
        Ok(())
    }

    fn stats(&self, session: &mut SessionState, args: &ArgMatches) -> anyhow::Result<()> {
        if args.get_flag("reset") {
            session.reset_analytics();
            if let Some(store) = self.store {
                store.reset()?;
            }
            println!("✅ Analytics reset");
            return Ok(());
        }

        println!("📊 Session Analytics");
        println!("{}", session.analytics_json()?);

        if let Some(limit) = args.get_one::<u64>("logs") {
            match self.store {
                Some(store) => {
                    for entry in store.recent_logs(*limit as usize)? {
                        println!(
                            "  [{}] {}",
                            entry.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
                            entry.message
                        );
                    }
                }
                None => println!("Statistics persistence is not enabled in configuration"),
            }
        }
        Ok(())
    }
}

fn print_inbox() {
    println!("📥 Inbox");
    for mail in inbox::SAMPLE_INBOX {
        println!("  #{} From: {}", mail.id, mail.from);
        println!("     Subject: {}", mail.subject);
        println!("     {}", mail.snippet);
    }
}
