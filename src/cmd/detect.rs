use vidlink::detect_video_provider;

pub fn cmd_detect(url: &str) {
    println!("{}", detect_video_provider(url.trim()));
}
