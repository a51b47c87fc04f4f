mod ffprobe_info;
mod frame_name;
mod image_codec;
mod path_validator;

pub use ffprobe_info::{VideoInfo, get_video_info};
pub use frame_name::{
    FRAME_EXTENSION, FRAME_NAME_DIGITS, FRAME_PREFIX, SortKey, frame_file_name,
    frame_file_pattern, frame_number, is_frame_file,
};
pub use image_codec::{
    Frame, RGB_CHANNELS, decode_frame, encode_frame, frame_shape, frame_to_rgb_image,
};
pub use path_validator::{ensure_directory_exists, validate_directory_exists};
