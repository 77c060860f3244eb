mod common;

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use zreuse_core::prelude::*;

    use crate::common::{frame_without_content_size, init_tracing, noise_payload, text_payload, trained_dictionary};

    #[test]
    fn unsized_frame_takes_streaming_path() {
        let codec = Codec::new();
        let payload = text_payload(300_000, 21);
        let frame = frame_without_content_size(&payload, 3);

        let mut restored = b"head".to_vec();
        restored.shrink_to_fit();
        let n = codec.decompress(&mut restored, &frame).unwrap();
        assert_eq!(n, payload.len());
        assert_eq!(&restored[..4], b"head");
        assert_eq!(&restored[4..], &payload[..]);

        let snap = codec.snapshot();
        assert_eq!(snap.decompress_streamed, 1);
        assert_eq!(snap.decompress_slow_path, 0);
        assert_eq!(snap.bytes_raw_out, payload.len() as u64);
    }

    #[test]
    fn unsized_frame_fits_fast_path_when_slack_allows() {
        let codec = Codec::new();
        let payload = text_payload(5_000, 22);
        let frame = frame_without_content_size(&payload, 3);

        let mut restored = Vec::with_capacity(64 * 1024);
        codec.decompress(&mut restored, &frame).unwrap();
        assert_eq!(restored, payload);
        assert_eq!(codec.snapshot().decompress_fast_path, 1);
    }

    #[test]
    fn forced_streaming_matches_one_shot() {
        let decoder = Decoder::new();
        let encoder = Encoder::default();
        let payload = noise_payload(500_000, 23);
        let mut compressed = Vec::new();
        encoder.compress(&mut compressed, &payload).unwrap();

        let mut one_shot = Vec::new();
        decoder.decompress(&mut one_shot, &compressed).unwrap();
        let mut streamed = Vec::new();
        let n = decoder.decompress_streaming(&mut streamed, &compressed, None).unwrap();
        assert_eq!(n, payload.len());
        assert_eq!(streamed, one_shot);

        let snap = decoder.snapshot();
        assert_eq!(snap.decompress_slow_path, 1);
        assert_eq!(snap.decompress_streamed, 1);
    }

    #[test]
    fn concatenated_frames_decode_in_order() {
        init_tracing();
        let codec = Codec::new();
        let first = text_payload(40_000, 24);
        let second = text_payload(70_000, 25);

        let mut joined = Vec::new();
        codec.compress(&mut joined, &first).unwrap();
        codec.compress(&mut joined, &second).unwrap();

        // The header only declares the first frame's size.
        let mut restored = Vec::new();
        codec.decompress(&mut restored, &joined).unwrap();
        assert_eq!(restored.len(), first.len() + second.len());
        assert_eq!(&restored[..first.len()], &first[..]);
        assert_eq!(&restored[first.len()..], &second[..]);
    }

    #[test]
    fn copy_decode_between_reader_and_writer() {
        let codec = Codec::new();
        let payload = text_payload(1_000_000, 26);
        let frame = frame_without_content_size(&payload, 1);

        let mut sink = Cursor::new(Vec::new());
        let written = codec.decoder().copy_decode(Cursor::new(&frame), &mut sink, None).unwrap();
        assert_eq!(written, payload.len() as u64);
        assert_eq!(sink.into_inner(), payload);
    }

    #[test]
    fn copy_decode_reports_truncation() {
        let codec = Codec::new();
        let frame = frame_without_content_size(&text_payload(100_000, 27), 3);
        let cut = &frame[..frame.len() / 2];

        let mut sink = Vec::new();
        let err = codec.decoder().copy_decode(cut, &mut sink, None).unwrap_err();
        assert!(matches!(err, CodecError::TruncatedFrame { .. }), "unexpected error: {err}");
        assert_eq!(codec.snapshot().decompress_errors, 1);
    }

    #[test]
    fn streaming_with_dictionary() {
        let raw = trained_dictionary("delta", 4096);
        let cdict = CompressionDict::new(&raw, 3).unwrap();
        let ddict = DecompressionDict::new(&raw).unwrap();
        let codec = Codec::new();

        let payload = crate::common::record("delta", 77);
        let mut compressed = Vec::new();
        codec.compress_dict(&mut compressed, &payload, &cdict).unwrap();

        let mut restored = Vec::new();
        codec.decoder().decompress_streaming(&mut restored, &compressed, Some(&ddict)).unwrap();
        assert_eq!(restored, payload);

        // The pooled stream decoder must not keep the dictionary referenced.
        let mut again = Vec::new();
        let err = codec.decoder().decompress_streaming(&mut again, &compressed, None).unwrap_err();
        assert!(err.is_invalid_input(), "unexpected error: {err}");
        assert!(again.is_empty());
    }

    #[test]
    fn unsized_frames_ending_on_chunk_boundary() {
        let chunk = zstd_safe::DCtx::out_size();
        let codec = Codec::new();
        for len in [chunk - 1, chunk, chunk + 1, 2 * chunk] {
            let payload = text_payload(len, len as u64);
            let frame = frame_without_content_size(&payload, 3);

            let mut restored = Vec::new();
            let n = codec.decompress(&mut restored, &frame).unwrap();
            assert_eq!(n, len, "decompress, {len} bytes");
            assert_eq!(restored, payload);

            let mut sink = Vec::new();
            let written = codec.decoder().copy_decode(&frame[..], &mut sink, None).unwrap();
            assert_eq!(written, len as u64, "copy_decode, {len} bytes");
            assert_eq!(sink, payload);
        }
        assert_eq!(codec.snapshot().decompress_errors, 0);
    }

    #[test]
    fn concatenated_frames_on_chunk_boundary() {
        let chunk = zstd_safe::DCtx::out_size();
        let codec = Codec::new();
        let first = text_payload(chunk, 29);
        let second = text_payload(chunk, 30);
        let mut joined = frame_without_content_size(&first, 3);
        joined.extend_from_slice(&frame_without_content_size(&second, 3));

        let mut restored = Vec::new();
        codec.decompress(&mut restored, &joined).unwrap();
        assert_eq!(restored.len(), 2 * chunk);
        assert_eq!(&restored[..chunk], &first[..]);
        assert_eq!(&restored[chunk..], &second[..]);
    }

    #[test]
    fn streaming_pool_is_reused() {
        let decoder = Decoder::new();
        let payload = text_payload(20_000, 28);
        let frame = frame_without_content_size(&payload, 3);
        for _ in 0..10 {
            let mut out = Vec::new();
            decoder.decompress(&mut out, &frame).unwrap();
            assert_eq!(out, payload);
        }
        // One one-shot context plus one stream decompressor.
        assert_eq!(decoder.contexts_created(), 2);
    }
}
