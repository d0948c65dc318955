// ============================================
// Texture - Загрузка текстур из glTF в GPU
// ============================================
// Декодирование делает сам gltf-импортёр; здесь только
// расширение до RGBA и заливка в текстуру.

/// Расширить пиксели до RGBA8. Форматы, которые нет смысла
/// тянуть в этой демке (16/32-битные), не поддерживаются.
pub fn widen_to_rgba(format: gltf::image::Format, pixels: &[u8]) -> Option<Vec<u8>> {
    use gltf::image::Format;

    match format {
        Format::R8G8B8A8 => Some(pixels.to_vec()),
        Format::R8G8B8 => {
            let mut out = Vec::with_capacity(pixels.len() / 3 * 4);
            for rgb in pixels.chunks_exact(3) {
                out.extend_from_slice(rgb);
                out.push(255);
            }
            Some(out)
        }
        Format::R8G8 => {
            let mut out = Vec::with_capacity(pixels.len() * 2);
            for lum in pixels.chunks_exact(2) {
                out.extend_from_slice(&[lum[0], lum[0], lum[0], lum[1]]);
            }
            Some(out)
        }
        Format::R8 => {
            let mut out = Vec::with_capacity(pixels.len() * 4);
            for &lum in pixels {
                out.extend_from_slice(&[lum, lum, lum, 255]);
            }
            Some(out)
        }
        _ => None,
    }
}

/// Залить RGBA-данные в текстуру
fn upload_rgba(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    width: u32,
    height: u32,
    data: &[u8],
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        data,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(width * 4),
            rows_per_image: Some(height),
        },
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
    );

    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

/// Текстура из декодированного glTF-изображения.
/// Неподдерживаемый формат — предупреждение и белая заглушка.
pub fn from_gltf_image(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    image: &gltf::image::Data,
) -> wgpu::TextureView {
    match widen_to_rgba(image.format, &image.pixels) {
        Some(rgba) => upload_rgba(device, queue, label, image.width, image.height, &rgba),
        None => {
            log::warn!(
                "texture '{}': unsupported pixel format {:?}, using fallback",
                label,
                image.format
            );
            fallback_texture(device, queue)
        }
    }
}

/// Белая 1x1 текстура для мешей без материала
pub fn fallback_texture(device: &wgpu::Device, queue: &wgpu::Queue) -> wgpu::TextureView {
    upload_rgba(device, queue, "Fallback White", 1, 1, &[255, 255, 255, 255])
}

/// Сэмплер материалов
pub fn material_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("Material Sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gltf::image::Format;

    #[test]
    fn test_widen_rgb_adds_opaque_alpha() {
        let rgba = widen_to_rgba(Format::R8G8B8, &[10, 20, 30, 40, 50, 60]).unwrap();
        assert_eq!(rgba, vec![10, 20, 30, 255, 40, 50, 60, 255]);
    }

    #[test]
    fn test_widen_rgba_is_passthrough() {
        let src = vec![1, 2, 3, 4];
        assert_eq!(widen_to_rgba(Format::R8G8B8A8, &src).unwrap(), src);
    }

    #[test]
    fn test_widen_grayscale() {
        assert_eq!(
            widen_to_rgba(Format::R8, &[7]).unwrap(),
            vec![7, 7, 7, 255]
        );
        assert_eq!(
            widen_to_rgba(Format::R8G8, &[9, 128]).unwrap(),
            vec![9, 9, 9, 128]
        );
    }

    #[test]
    fn test_widen_rejects_wide_formats() {
        assert!(widen_to_rgba(Format::R16G16B16A16, &[0, 0]).is_none());
    }
}
