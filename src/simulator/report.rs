//! Simulation report generation.

use crate::config::Tunables;
use serde::Serialize;

/// Outcome of one simulated episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub score: u32,
    pub frames: u64,
    /// False when the episode hit the frame limit still alive.
    pub crashed: bool,
}

/// Aggregated results from multiple episodes.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_crashed: u32,
    pub runs_timed_out: u32,

    pub avg_score: f64,
    pub max_score: u32,
    pub avg_frames: f64,
    /// Pipe pairs passed on average (each pair scores 2).
    pub avg_pairs_passed: f64,

    pub tunables: Tunables,
    pub runs: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>, tunables: Tunables) -> Self {
        let num_runs = runs.len() as u32;
        let runs_crashed = runs.iter().filter(|r| r.crashed).count() as u32;
        let denom = num_runs.max(1) as f64;

        let avg_score = runs.iter().map(|r| r.score as f64).sum::<f64>() / denom;
        let avg_frames = runs.iter().map(|r| r.frames as f64).sum::<f64>() / denom;
        let max_score = runs.iter().map(|r| r.score).max().unwrap_or(0);

        Self {
            num_runs,
            runs_crashed,
            runs_timed_out: num_runs - runs_crashed,
            avg_score,
            max_score,
            avg_frames,
            avg_pairs_passed: avg_score / 2.0,
            tunables,
            runs,
        }
    }

    /// One-line digest printed when the runs finish.
    pub fn summary_line(&self) -> String {
        format!(
            "Finished {} runs: {} crashed, {} timed out, avg score {:.1}",
            self.num_runs, self.runs_crashed, self.runs_timed_out, self.avg_score
        )
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} crashed, {} timed out\n\n",
            self.num_runs, self.runs_crashed, self.runs_timed_out
        ));

        report.push_str("── SCORE ────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Score:           {:.1}\n", self.avg_score));
        report.push_str(&format!("  Max Score:           {}\n", self.max_score));
        report.push_str(&format!(
            "  Avg Pairs Passed:    {:.1}\n",
            self.avg_pairs_passed
        ));
        report.push_str(&format!("  Avg Frames Survived: {:.0}\n\n", self.avg_frames));

        report.push_str("── TUNABLES ─────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Gravity:             {}\n", self.tunables.gravity));
        report.push_str(&format!(
            "  Jump Strength:       {}\n",
            self.tunables.jump_strength
        ));
        report.push_str(&format!("  Pipe Speed:          {}\n", self.tunables.pipe_speed));
        report.push_str(&format!(
            "  Pipe Interval:       {}\n",
            self.tunables.pipe_interval
        ));

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_runs() -> Vec<RunStats> {
        vec![
            RunStats {
                score: 4,
                frames: 300,
                crashed: true,
            },
            RunStats {
                score: 10,
                frames: 900,
                crashed: true,
            },
            RunStats {
                score: 0,
                frames: 1000,
                crashed: false,
            },
        ]
    }

    #[test]
    fn test_report_generation() {
        let report = SimReport::from_runs(sample_runs(), Tunables::default());
        assert_eq!(report.num_runs, 3);
        assert_eq!(report.runs_crashed, 2);
        assert_eq!(report.runs_timed_out, 1);
        assert_eq!(report.max_score, 10);
        assert!((report.avg_score - 14.0 / 3.0).abs() < 1e-9);
        assert!((report.avg_frames - 2200.0 / 3.0).abs() < 1e-9);
        assert!((report.avg_pairs_passed - 7.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_line() {
        let report = SimReport::from_runs(sample_runs(), Tunables::default());
        assert_eq!(
            report.summary_line(),
            "Finished 3 runs: 2 crashed, 1 timed out, avg score 4.7"
        );
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(Vec::new(), Tunables::default());
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.max_score, 0);
        assert_eq!(report.avg_score, 0.0);
    }

    #[test]
    fn test_text_and_json_output() {
        let report = SimReport::from_runs(sample_runs(), Tunables::default());
        let text = report.to_text();
        assert!(text.contains("SIMULATION REPORT"));
        assert!(text.contains("Max Score:           10"));

        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(json["num_runs"], 3);
        assert_eq!(json["tunables"]["pipe_interval"], 200.0);
        assert_eq!(json["runs"].as_array().map(|a| a.len()), Some(3));
    }
}
