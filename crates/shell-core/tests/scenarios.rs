use std::collections::VecDeque;

use shell_core::{run_interactive, run_script, ErrorKind, ScriptOutcome, Session, ShellError, Status};
use vfs::{Vfs, VfsPath};

const MIXED: &str = "cd /home\nbadcmd\nls\n";

fn lines(session: &mut Session, line: &str) -> Vec<String> {
    let outcome = session.execute_line(line);
    assert_eq!(outcome.status, Status::Success, "{line}: {:?}", outcome.error());
    outcome.lines
}

#[test]
fn default_tree_walkthrough() {
    let mut session = Session::default();
    assert_eq!(lines(&mut session, "ls /"), ["home etc readme.txt"]);

    let outcome = session.execute_line("cd /nope");
    assert_eq!(outcome.error().map(ShellError::kind), Some(ErrorKind::NotFound));
    assert_eq!(session.cwd().to_string(), "/");

    let outcome = session.execute_line("chmod 999 /readme.txt");
    assert_eq!(outcome.error().map(ShellError::kind), Some(ErrorKind::ConstraintViolation));
    assert_eq!(lines(&mut session, "ls -l /"), ["d755 home d755 etc f644 readme.txt 2048b"]);

    lines(&mut session, "chmod 700 /readme.txt");
    let listing = lines(&mut session, "ls -l /");
    assert!(listing[0].contains("f700 readme.txt 2048b"), "{listing:?}");
}

#[test]
fn script_halts_at_unknown_command() {
    let mut session = Session::default();
    let mut out: Vec<String> = Vec::new();
    let outcome = run_script(&mut session, MIXED.as_bytes(), &mut out);

    assert_eq!(outcome, ScriptOutcome::Aborted { line: 2, error: ShellError::UnknownCommand("badcmd".into()) });
    assert_eq!(
        out,
        [
            "[Script:1] > cd /home",
            "Current directory: /home",
            "[Script:2] > badcmd",
            "Unknown command: badcmd",
            "Script stopped at line 2 due to error",
        ]
    );
    assert!(!out.iter().any(|line| line.contains("[Script:3]")));
}

#[test]
fn interactive_continues_past_unknown_command() {
    let mut session = Session::default();
    let mut source: VecDeque<String> = MIXED.lines().map(String::from).collect();
    let mut out: Vec<String> = Vec::new();
    let summary = run_interactive(&mut session, &mut source, &mut out).unwrap();

    assert_eq!(summary.commands, 3);
    assert_eq!(summary.failures, 1);
    assert_eq!(out, ["Current directory: /home", "Unknown command: badcmd", "user"]);
}

#[test]
fn cd_up_from_root_always_fails() {
    let mut session = Session::default();
    for _ in 0..3 {
        assert_eq!(session.execute_line("cd ..").status, Status::Failure(ShellError::AlreadyAtRoot));
        assert!(session.cwd().is_root());
    }
}

#[test]
fn copy_is_not_shared() {
    let mut session = Session::default();
    lines(&mut session, "cp /etc/settings.ini /home/settings.ini");
    lines(&mut session, "chmod 600 /home/settings.ini");
    assert_eq!(lines(&mut session, "ls -l /etc"), ["f644 config.txt 1024b f644 settings.ini 512b"]);
    assert_eq!(lines(&mut session, "ls -l /home"), ["d755 user f600 settings.ini 512b"]);
}

#[test]
fn rmdir_then_listing() {
    let mut session = Session::default();
    assert!(session.execute_line("rmdir /home/user").is_failure());
    lines(&mut session, "rmdir /home/user/documents");
    lines(&mut session, "rmdir /home/user/photos");
    assert_eq!(lines(&mut session, "ls /home/user"), [""]);
    lines(&mut session, "rmdir /home/user");
    assert_eq!(lines(&mut session, "ls /home"), [""]);
}

#[test]
fn head_past_end_is_not_an_error() {
    let mut session = Session::default();
    lines(&mut session, "cd /etc");
    let all = lines(&mut session, "head settings.ini");
    assert_eq!(all.len(), 5);
    assert_eq!(lines(&mut session, "head -n 3 settings.ini").len(), 3);
    assert_eq!(lines(&mut session, "head -n 30 settings.ini"), all);
}

#[test]
fn resolution_properties_through_session() {
    let session = Session::default();
    let vfs = session.vfs();
    let root = VfsPath::root();
    for cwd in ["/", "/home", "/home/user", "/etc"] {
        let cwd = VfsPath::parse(cwd);
        assert_eq!(vfs.resolve("/etc/config.txt", &cwd), vfs.resolve("/etc/config.txt", &root));
        for rel in ["user", "config.txt", "photos", "missing"] {
            assert_eq!(vfs.resolve(rel, &cwd), vfs.resolve(&format!("{cwd}/{rel}"), &root));
        }
    }
}

#[test]
fn quoted_arguments_reach_handlers() {
    let mut session = Session::default();
    lines(&mut session, "cp /readme.txt '/home/read me.txt'");
    assert_eq!(lines(&mut session, "ls /home"), ["user read me.txt"]);
    assert_eq!(lines(&mut session, "head -n 1 \"/home/read me.txt\""), ["Welcome to the virtual filesystem."]);
}
