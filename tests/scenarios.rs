//! End-to-end descriptor -> kernel scenarios

mod common;

use approx::assert_relative_eq;

use dataset_vision::vision;
use dataset_vision::{BorderType, InterpolationMode, KernelArgs, KernelConfig, Tensor};

use common::{capture_logs, encoded_png, error_lines, gradient_image};

#[test]
fn test_pad_single_value() {
    let op = vision::pad(vec![2], vec![128], BorderType::Constant).unwrap();
    assert_eq!(
        op.build().args(),
        KernelArgs::Pad {
            top: 2,
            bottom: 2,
            left: 2,
            right: 2,
            mode: BorderType::Constant,
            fill: [128, 128, 128],
        }
    );
}

#[test]
fn test_pad_two_values() {
    let op = vision::pad(vec![1, 2], vec![10, 20, 30], BorderType::Reflect).unwrap();
    assert_eq!(
        op.build().args(),
        KernelArgs::Pad {
            top: 2,
            bottom: 2,
            left: 1,
            right: 1,
            mode: BorderType::Reflect,
            fill: [10, 20, 30],
        }
    );
}

#[test]
fn test_pad_four_values() {
    let op = vision::pad(vec![1, 2, 3, 4], vec![0], BorderType::Constant).unwrap();
    assert_eq!(
        op.build().args(),
        KernelArgs::Pad {
            top: 2,
            bottom: 4,
            left: 1,
            right: 3,
            mode: BorderType::Constant,
            fill: [0, 0, 0],
        }
    );

    let out = op.build().apply(&gradient_image(3, 3)).unwrap();
    assert_eq!(out.shape(), &[9, 7, 3]);
}

#[test]
fn test_pad_three_values_rejected() {
    capture_logs();
    assert!(vision::pad(vec![1, 2, 3], vec![0], BorderType::Constant).is_none());
    let lines = error_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0], "Pad: padding vector has incorrect size: 3");
}

#[test]
fn test_random_color_adjust_ranges() {
    let op = vision::random_color_adjust(vec![0.5], vec![0.8, 1.2], vec![1.0], vec![0.0]).unwrap();
    assert_eq!(
        op.build().args(),
        KernelArgs::RandomColorAdjust {
            brightness: (0.5, 0.5),
            contrast: (0.8, 1.2),
            saturation: (1.0, 1.0),
            hue: (0.0, 0.0),
        }
    );
}

#[test]
fn test_normalize_imagenet() {
    let mean = vec![121.0, 115.0, 100.0];
    let std = vec![70.0, 68.0, 71.0];
    let op = vision::normalize(mean, std).unwrap();
    assert_eq!(
        op.build().args(),
        KernelArgs::Normalize {
            mean: [121.0, 115.0, 100.0],
            std: [70.0, 68.0, 71.0],
        }
    );

    capture_logs();
    assert!(vision::normalize(vec![0.5, 0.5], vec![0.5; 3]).is_none());
    assert_eq!(error_lines().len(), 1);
}

#[test]
fn test_uniform_augment_children() {
    let children = vec![
        vision::resize(vec![32, 32], InterpolationMode::Bilinear).unwrap(),
        vision::random_horizontal_flip(0.5).unwrap(),
    ];
    let op = vision::uniform_augment(children, 1).unwrap();
    match op.build().args() {
        KernelArgs::UniformAugment { transforms, num_ops } => {
            assert_eq!(num_ops, 1);
            assert_eq!(transforms.len(), 2);
            assert!(matches!(transforms[0], KernelArgs::Resize { height: 32, width: 32, .. }));
            assert!(matches!(transforms[1], KernelArgs::RandomHorizontalFlip { .. }));
        }
        other => panic!("unexpected kernel args {:?}", other),
    }
}

#[test]
fn test_uniform_augment_applies_at_most_num_ops() {
    let children = vec![
        vision::resize(vec![4, 6], InterpolationMode::Nearest).unwrap(),
        vision::center_crop(vec![4, 6]).unwrap(),
    ];
    let op = vision::uniform_augment(children, 5).unwrap();
    let kernel = op.build_with(&KernelConfig::seeded(3));
    // Either order ends with a 4x6 image
    let out = kernel.apply(&gradient_image(8, 8)).unwrap();
    assert_eq!(out.shape(), &[4, 6, 3]);

    let none = vision::uniform_augment(vec![vision::center_crop(vec![2]).unwrap()], 0).unwrap();
    let out = none.build().apply(&gradient_image(8, 8)).unwrap();
    assert_eq!(out.shape(), &[8, 8, 3]);
}

#[test]
fn test_size_sentinel_reaches_kernels() {
    let square = vision::center_crop(vec![7]).unwrap();
    let explicit = vision::center_crop(vec![7, 0]).unwrap();
    assert_eq!(square.build().args(), KernelArgs::CenterCrop { crop_h: 7, crop_w: 0 });
    assert_eq!(square.build().args(), explicit.build().args());

    let out = square.build().apply(&gradient_image(9, 12)).unwrap();
    assert_eq!(out.shape(), &[7, 7, 3]);

    let resized = vision::resize(vec![5], InterpolationMode::Bilinear)
        .unwrap()
        .build()
        .apply(&gradient_image(9, 12))
        .unwrap();
    assert_eq!(resized.shape(), &[5, 5, 3]);
}

#[test]
fn test_decode_resize_normalize_pipeline() {
    let bytes = Tensor::encoded(encoded_png(6, 4));
    let decoded = vision::decode(true).unwrap().build().apply(&bytes).unwrap();
    assert_eq!(decoded.shape(), &[6, 4, 3]);
    assert_eq!(decoded.as_u8().unwrap(), gradient_image(6, 4).as_u8().unwrap());

    let resized = vision::resize(vec![3, 2], InterpolationMode::Nearest)
        .unwrap()
        .build()
        .apply(&decoded)
        .unwrap();
    assert_eq!(resized.shape(), &[3, 2, 3]);

    let normalized = vision::normalize(vec![0.0; 3], vec![2.0; 3])
        .unwrap()
        .build()
        .apply(&resized)
        .unwrap();
    let expected: Vec<f32> = resized.as_u8().unwrap().iter().map(|&v| v as f32 / 2.0).collect();
    for (got, want) in normalized.as_f32().unwrap().iter().zip(&expected) {
        assert_relative_eq!(*got, *want);
    }
}

#[test]
fn test_decode_bgr_swaps_channels() {
    let bytes = Tensor::encoded(encoded_png(2, 3));
    let decoded = vision::decode(false).unwrap().build().apply(&bytes).unwrap();
    let rgb = gradient_image(2, 3);
    for (bgr, rgb) in decoded.as_u8().unwrap().chunks(3).zip(rgb.as_u8().unwrap().chunks(3)) {
        assert_eq!(bgr, &[rgb[2], rgb[1], rgb[0]]);
    }
}

#[test]
fn test_random_crop_with_padding() {
    let op = vision::random_crop(vec![6], vec![1, 1, 1, 1], false, vec![0; 3]).unwrap();
    let kernel = op.build_with(&KernelConfig::seeded(11));
    let out = kernel.apply(&gradient_image(4, 4)).unwrap();
    assert_eq!(out.shape(), &[6, 6, 3]);

    // Too large without pad_if_needed
    let too_large = vision::random_crop(vec![8], vec![0; 4], false, vec![0; 3]).unwrap();
    assert!(too_large.build().apply(&gradient_image(4, 4)).is_err());

    let grows = vision::random_crop(vec![8], vec![0; 4], true, vec![0; 3]).unwrap();
    assert_eq!(grows.build().apply(&gradient_image(4, 4)).unwrap().shape(), &[8, 8, 3]);
}

#[test]
fn test_flip_certain_probability() {
    let image = gradient_image(2, 3);
    let flipped = vision::random_horizontal_flip(1.0).unwrap().build().apply(&image).unwrap();
    let data = flipped.as_u8().unwrap();
    // Row 0 now starts with what was column 2
    assert_eq!(&data[0..3], &[0, 2, 2]);

    let kept = vision::random_vertical_flip(0.0).unwrap().build().apply(&image).unwrap();
    assert_eq!(kept.as_u8().unwrap(), image.as_u8().unwrap());
}

#[test]
fn test_seeded_builds_are_reproducible() {
    let op = vision::cut_out(2, 3).unwrap();
    let image = gradient_image(8, 8);
    let a = op.build_with(&KernelConfig::seeded(42)).apply(&image).unwrap();
    let b = op.build_with(&KernelConfig::seeded(42)).apply(&image).unwrap();
    assert_eq!(a.as_u8().unwrap(), b.as_u8().unwrap());
}

#[test]
fn test_apply_batch_keeps_order() {
    let kernel = vision::center_crop(vec![2]).unwrap().build();
    let batch: Vec<Tensor> = (3..7).map(|n| gradient_image(n, n)).collect();
    let out = kernel.apply_batch(&batch).unwrap();
    assert_eq!(out.len(), 4);
    for (input, output) in batch.iter().zip(&out) {
        let expected = kernel.apply(input).unwrap();
        assert_eq!(output.as_u8().unwrap(), expected.as_u8().unwrap());
    }
}
