// ============================================
// Cube Faces - Шесть проекций точечного света
// ============================================
// Для каждой грани кубической карты строится view-projection:
// перспектива 90° с aspect ровно 1.0, направленная вдоль одной
// из главных осей. Up-вектора подобраны под стандартную
// ориентацию граней: для ±Y они перпендикулярны остальным,
// иначе на стыках граней появляется шов.

use ultraviolet::{Mat4, Vec3};

/// Количество граней кубической карты
pub const FACE_COUNT: usize = 6;

/// Направления граней и их up-вектора,
/// в порядке слоёв кубической текстуры: +X, -X, +Y, -Y, +Z, -Z
pub fn face_basis() -> [(Vec3, Vec3); FACE_COUNT] {
    [
        (Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, -1.0, 0.0)),
        (Vec3::new(-1.0, 0.0, 0.0), Vec3::new(0.0, -1.0, 0.0)),
        (Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
        (Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.0, 0.0, -1.0)),
        (Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, -1.0, 0.0)),
        (Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, -1.0, 0.0)),
    ]
}

/// Матрицы view-projection для всех шести граней.
/// Aspect всегда 1.0 — грани квадратные по построению.
pub fn face_view_projections(light_pos: Vec3, near: f32, far: f32) -> [Mat4; FACE_COUNT] {
    let proj = ultraviolet::projection::perspective_wgpu_dx(
        90.0_f32.to_radians(),
        1.0,
        near,
        far,
    );

    face_basis().map(|(dir, up)| proj * Mat4::look_at(light_pos, light_pos + dir, up))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_up_vector_convention() {
        let basis = face_basis();
        let default_up = Vec3::new(0.0, -1.0, 0.0);

        // Грани ±X и ±Z используют общий up
        for i in [0usize, 1, 4, 5] {
            assert_eq!(basis[i].1, default_up, "face {}", i);
        }

        // Грани ±Y используют up, перпендикулярный остальным
        for i in [2usize, 3] {
            assert!(approx(basis[i].1.dot(default_up), 0.0), "face {}", i);
        }
        assert_eq!(basis[2].1, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(basis[3].1, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_directions_cover_all_axes() {
        let basis = face_basis();
        for (dir, up) in basis {
            // Направление и up не коллинеарны, иначе look_at вырожден
            assert!(dir.cross(up).mag() > 0.5);
            assert!(approx(dir.mag(), 1.0));
        }
        // Сумма направлений — ноль: оси покрыты парами
        let sum: Vec3 = basis.iter().fold(Vec3::zero(), |acc, (d, _)| acc + *d);
        assert!(sum.mag() < EPS);
    }

    #[test]
    fn test_look_at_round_trip() {
        // view-матрица переводит позицию глаза в локальный ноль
        let eye = Vec3::new(2.0, -3.0, 7.0);
        for (dir, up) in face_basis() {
            let view = Mat4::look_at(eye, eye + dir, up);
            let origin = view * ultraviolet::Vec4::new(eye.x, eye.y, eye.z, 1.0);
            assert!(approx(origin.x, 0.0));
            assert!(approx(origin.y, 0.0));
            assert!(approx(origin.z, 0.0));
            assert!(approx(origin.w, 1.0));
        }
    }

    #[test]
    fn test_square_aspect() {
        // aspect == 1.0: фокусные коэффициенты по X и Y совпадают
        let proj = ultraviolet::projection::perspective_wgpu_dx(
            90.0_f32.to_radians(),
            1.0,
            1.0,
            25.0,
        );
        let arr: [[f32; 4]; 4] = proj.into();
        assert!(approx(arr[0][0].abs(), arr[1][1].abs()));
    }

    #[test]
    fn test_face_matrices_deterministic() {
        // Повторное построение даёт побитово те же матрицы —
        // CPU-половина идемпотентности теневого прохода
        let a = face_view_projections(Vec3::zero(), 1.0, 25.0);
        let b = face_view_projections(Vec3::zero(), 1.0, 25.0);
        for i in 0..FACE_COUNT {
            let av: [[f32; 4]; 4] = a[i].into();
            let bv: [[f32; 4]; 4] = b[i].into();
            assert_eq!(av, bv, "face {}", i);
        }
    }
}
