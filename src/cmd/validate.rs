use vidlink::{is_valid_video_id, VideoProvider};

/// Print `valid` or `invalid`; returns whether the id is valid.
pub fn cmd_validate(provider: VideoProvider, id: &str) -> bool {
    let valid = is_valid_video_id(provider, id);
    println!("{}", if valid { "valid" } else { "invalid" });
    valid
}
