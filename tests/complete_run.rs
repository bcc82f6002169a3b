#![cfg(unix)]

mod common;

use std::fs;

use trackzip::RunOutcome;

#[test]
fn extracts_every_track_in_ordinal_order_and_zips_them() {
    let root = tempfile::tempdir().unwrap();
    let tools = tempfile::tempdir().unwrap();
    fs::write(root.path().join("movie.mp4"), b"").unwrap();
    let ffmpeg = common::fake_ffmpeg(tools.path(), "");

    let outcome = common::run_session(
        root.path(),
        &ffmpeg,
        "1\n[{'rownum': 2, 'typeName': 'fr'}, {'rownum': 1, 'typeName': 'en'}]\n",
    )
    .unwrap();

    let out_dir = root.path().join("movie");
    let archive = out_dir.join("movie_output.zip");
    assert_eq!(
        outcome,
        RunOutcome::Completed {
            archive: archive.clone(),
            tracks: 3
        }
    );

    let calls = common::calls(tools.path());
    assert_eq!(calls.len(), 3);
    for (call, stream) in calls.iter().zip(["0:1", "0:2", "0:3"]) {
        assert!(call.contains(&format!("-map {stream} ")), "call was: {call}");
        assert!(call.contains("-b:a 129k -f mp3 -vn"), "call was: {call}");
    }

    assert_eq!(
        common::archive_entries(&archive),
        ["bz.mp3", "en.mp3", "fr.mp3"]
    );
    for name in ["bz.mp3", "en.mp3", "fr.mp3"] {
        assert!(out_dir.join(name).is_file());
    }
}
