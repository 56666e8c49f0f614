//! Kanatype - 로마자 타이핑 연습 (터미널)

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use kanatype::config::{load_config, rankings_path, DrillMode, KanatypeConfig};
use kanatype::drill::{
    home_position_text, next_word, words, wpm, KeyOutcome, RankingEntry, Rankings, ScoreBoard,
    TypingSession,
};

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 설정 로드
    let config = load_config();

    let targets = match drill_targets(&config) {
        Some(targets) => targets,
        None => {
            eprintln!("잘못된 홈포지션 레벨: {}", config.home_position_level);
            return;
        }
    };

    let time_limit = Duration::from_secs(config.time_limit_secs);
    println!("制限時間: {}秒 (空行で終了)", config.time_limit_secs);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut board = ScoreBoard::new();
    let mut typed_chars = 0usize;
    let mut started_at: Option<Instant> = None;
    let target_refs: Vec<&str> = targets.iter().map(String::as_str).collect();
    let mut target = target_refs[0];

    loop {
        let mut session = TypingSession::with_board(target, board);
        println!();
        println!("  {}", session.target());
        println!("  {}", session.romaji());
        print!("> ");
        let _ = io::stdout().flush();

        let shown_at = Instant::now();
        let start = *started_at.get_or_insert(shown_at);
        session.start(shown_at);

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                log::error!("입력 읽기 실패: {}", e);
                board = session.into_board();
                break;
            }
            None => {
                board = session.into_board();
                break;
            }
        };
        if line.is_empty() {
            board = session.into_board();
            break;
        }

        let now = Instant::now();

        // 한 줄을 키 입력 시퀀스로 재생
        for c in line.chars() {
            match session.type_char(c, now) {
                KeyOutcome::Accepted => {}
                KeyOutcome::Rejected => println!("  ✗ '{}' (入力: {})", c, session.typed()),
                KeyOutcome::Completed => break,
            }
        }

        let completed = session.is_completed();
        typed_chars += session.typed().chars().count();
        board = session.into_board();

        if completed {
            println!("  ○ combo {} / score {}", board.combo, board.score);
            target = next_word(target, &target_refs).unwrap_or(target);
        } else {
            println!("  未完了");
        }

        if now.duration_since(start) >= time_limit {
            println!();
            println!("時間切れ！");
            break;
        }
    }

    let elapsed = started_at.map(|s| s.elapsed()).unwrap_or(Duration::ZERO);
    let final_wpm = wpm(typed_chars, elapsed);
    println!();
    println!(
        "得点: {} pts | スピード: {} WPM | 精度: {}%",
        board.score,
        final_wpm,
        board.accuracy()
    );

    if board.total_keys > 0 {
        save_ranking(&config, &board, final_wpm);
    }
}

/// 설정된 모드의 연습 대상 목록
fn drill_targets(config: &KanatypeConfig) -> Option<Vec<String>> {
    match config.mode {
        DrillMode::Words => Some(
            words(config.difficulty)
                .iter()
                .map(|w| w.to_string())
                .collect(),
        ),
        DrillMode::HomePosition => {
            let text = home_position_text(config.home_position_level)?;
            log::debug!("홈포지션 연습 문자열: {}", text);
            Some(vec![text])
        }
    }
}

fn mode_label(config: &KanatypeConfig) -> String {
    match config.mode {
        DrillMode::Words => "通常モード".to_string(),
        DrillMode::HomePosition => {
            format!("ホームポジション Lv{}", config.home_position_level + 1)
        }
    }
}

fn save_ranking(config: &KanatypeConfig, board: &ScoreBoard, final_wpm: u32) {
    let path = rankings_path();
    let mut rankings = match Rankings::load(&path) {
        Ok(rankings) => rankings,
        Err(e) => {
            log::warn!("랭킹 로드 실패, 새로 시작: {}", e);
            Rankings::new()
        }
    };

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let entry = RankingEntry {
        timestamp,
        wpm: final_wpm,
        accuracy: board.accuracy(),
        score: board.score,
        mode: mode_label(config),
    };

    if let Some(rank) = rankings.insert(entry, config.ranking_limit) {
        println!("ランキング {}位！", rank + 1);
    }

    if let Err(e) = rankings.save(&path) {
        log::error!("랭킹 저장 실패: {}", e);
    }
}
