//! Global CSS styles for the card.
//!
//! Palette variables come from `colors::css_variables`; per-element
//! animations (hearts, confetti, splash, content) are generated at runtime
//! from `Motion` data, as are the envelope's spring easings.

pub const GLOBAL_STYLES: &str = r#"
/* === Fonts & Motion Tokens === */
:root {
  --font-sans: 'Inter', system-ui, sans-serif;
  --font-serif: 'Playfair Display', Georgia, serif;
  --font-script: 'Dancing Script', cursive;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
  --flap-turn: 600ms ease-in-out;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--paper);
  color: var(--pink-500);
  min-height: 100vh;
  overflow-x: hidden;
}

/* === Page Shell === */
.main-container {
  position: relative;
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 5rem 0;
  background: var(--paper);
}

.content {
  width: 100%;
  display: flex;
  flex-direction: column;
  align-items: center;
}

.title-block {
  display: flex;
  flex-direction: column;
  align-items: center;
  margin-bottom: 6rem;
}

.title {
  font-family: var(--font-script);
  font-size: 3.5rem;
  font-weight: 400;
  color: var(--pink-500);
  text-align: center;
}

.letters-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
  gap: 2rem;
  width: 100%;
  max-width: 960px;
  padding: 0 1rem;
}

.hint {
  margin-top: 8rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  transition: opacity var(--transition-slow);
}

.hint:hover {
  opacity: 1 !important;
}

.hint p {
  color: var(--pink-400);
  font-size: 0.875rem;
  letter-spacing: 0.3em;
  text-transform: uppercase;
}

.footer {
  position: fixed;
  bottom: 2rem;
  color: var(--pink-400);
  opacity: 0.8;
  font-size: 0.75rem;
  font-weight: 500;
  letter-spacing: 0.3em;
  text-transform: uppercase;
  pointer-events: none;
}

/* === Splash === */
.splash {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

.splash-heart {
  color: var(--pink-400);
  display: flex;
}

.splash-caption {
  color: var(--pink-400);
  font-weight: 300;
  font-size: 0.875rem;
  letter-spacing: 0.4em;
  text-transform: uppercase;
}

/* === Ambient Heart Field === */
.heart-field {
  position: fixed;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
  z-index: -10;
}

.heart-field-veil {
  position: absolute;
  inset: 0;
  background: var(--paper-veil);
  backdrop-filter: blur(2px);
}

.floating-heart {
  position: absolute;
  top: 0;
  color: var(--heart-red);
  opacity: 0;
  will-change: transform, opacity;
}

/* === Confetti === */
.confetti-layer {
  position: fixed;
  inset: 0;
  pointer-events: none;
  z-index: 90;
}

.confetti-burst {
  position: absolute;
  width: 0;
  height: 0;
}

.confetti-piece {
  position: absolute;
  border-radius: 2px;
  will-change: transform, opacity;
}

/* === Envelope === */
.letter-slot {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  width: 100%;
  min-height: 500px;
  padding: 2.5rem 0;
}

.envelope {
  position: relative;
  cursor: pointer;
  perspective: 1000px;
}

.envelope.closed:hover {
  transform: scale(1.02);
}

.envelope-body {
  position: relative;
  width: 20rem;
  height: 14rem;
  background: var(--envelope);
  border: 1px solid var(--pink-100);
  border-radius: 0.5rem;
  box-shadow: 0 20px 25px -5px rgba(252, 231, 243, 0.1);
  display: flex;
  align-items: center;
  justify-content: center;
}

.envelope-flap {
  position: absolute;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
  transform-origin: top;
  transform-style: preserve-3d;
  backface-visibility: hidden;
  z-index: 20;
  transition: transform var(--flap-turn), z-index var(--flap-turn);
}

.envelope.open .envelope-flap {
  transform: rotateX(180deg);
  z-index: 0;
}

.flap-triangle {
  width: 100%;
  height: 0;
  border-left: 160px solid transparent;
  border-right: 160px solid transparent;
  border-top: 112px solid var(--pink-50);
  transition: border-color var(--transition-normal);
}

.envelope.closed:hover .flap-triangle {
  border-top-color: var(--pink-100);
}

.envelope-seal {
  position: absolute;
  top: 60px;
  left: 50%;
  transform: translateX(-50%);
  color: var(--pink-300);
  opacity: 0.6;
  display: flex;
}

.name-tag {
  z-index: 30;
  padding: 0.5rem 1.25rem;
  background: rgba(255, 255, 255, 0.9);
  backdrop-filter: blur(4px);
  border: 1px solid var(--pink-100);
  border-radius: 9999px;
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
  animation: name-tag-in 300ms ease 200ms both;
}

.name-tag p {
  color: var(--pink-500);
  font-weight: 300;
  font-size: 0.75rem;
  letter-spacing: 0.2em;
  text-transform: uppercase;
}

@keyframes name-tag-in {
  from { opacity: 0; transform: translateY(5px); }
  to { opacity: 1; transform: translateY(0); }
}

.letter-paper {
  position: absolute;
  left: 1rem;
  right: 1rem;
  bottom: 45%;
  z-index: 10;
  padding: 1rem;
  background: var(--envelope);
  border: 1px solid var(--pink-50);
  border-radius: 0.25rem;
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
  text-align: center;
}

.letter-photo {
  position: relative;
  width: 100%;
  aspect-ratio: 4 / 5;
  background: rgba(253, 242, 248, 0.5);
  border-radius: 0.25rem;
  overflow: hidden;
  cursor: zoom-in;
}

.letter-photo img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.photo-hover {
  position: absolute;
  inset: 0;
  background: rgba(0, 0, 0, 0.1);
  opacity: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  transition: opacity var(--transition-normal);
}

.letter-photo:hover .photo-hover {
  opacity: 1;
}

.expand-badge {
  display: flex;
  padding: 0.5rem;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.8);
  color: var(--pink-500);
  animation: blink 1.2s ease-in-out infinite;
}

@keyframes blink {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.4; }
}

.letter-signature {
  margin-top: 1rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  color: var(--pink-400);
}

.letter-name {
  margin-top: 0.25rem;
  font-family: var(--font-serif);
  font-style: italic;
  font-size: 1.125rem;
  color: var(--pink-600);
}

.pulse {
  animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.5; }
}

.envelope-pockets {
  position: absolute;
  inset: 0;
  z-index: 0;
  overflow: hidden;
  border-radius: 0.5rem;
  pointer-events: none;
}

.pocket-bottom {
  position: absolute;
  bottom: 0;
  left: 0;
  width: 100%;
  height: 0;
  border-left: 160px solid var(--envelope);
  border-right: 160px solid var(--envelope);
  border-bottom: 112px solid rgba(0, 0, 0, 0.05);
}

.pocket-left,
.pocket-right {
  position: absolute;
  top: 0;
  height: 100%;
  width: 0;
  border-top: 112px solid transparent;
  border-bottom: 112px solid transparent;
  opacity: 0.8;
}

.pocket-left {
  left: 0;
  border-left: 160px solid var(--envelope);
}

.pocket-right {
  right: 0;
  border-right: 160px solid var(--envelope);
}

.envelope-shadow {
  position: absolute;
  bottom: -2rem;
  left: 50%;
  transform: translateX(-50%);
  width: 12rem;
  height: 1rem;
  background: rgba(251, 207, 232, 0.1);
  filter: blur(24px);
  border-radius: 9999px;
  z-index: -10;
}

/* === Buttons === */
.btn-pill {
  padding: 0.75rem 1.5rem;
  background: transparent;
  border: 1px solid var(--pink-100);
  border-radius: 9999px;
  color: var(--pink-400);
  font-family: var(--font-sans);
  font-size: 0.75rem;
  font-weight: 500;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  cursor: pointer;
  transition: all var(--transition-normal);
}

.btn-pill:hover {
  color: var(--pink-600);
  background: var(--pink-50);
}

.close-letter {
  margin-top: 13rem;
  z-index: 40;
  animation: close-letter-in 300ms ease both;
}

@keyframes close-letter-in {
  from { opacity: 0; transform: translateY(10px); }
  to { opacity: 1; transform: translateY(0); }
}

.icon-btn {
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 0.5rem;
  background: none;
  border: none;
  cursor: pointer;
  transition: color var(--transition-fast);
}

.icon {
  display: block;
}

/* === Fullscreen Viewer === */
.viewer-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 2.5rem;
  background: var(--viewer-backdrop);
  backdrop-filter: blur(12px);
  animation: viewer-fade 300ms ease both;
}

@keyframes viewer-fade {
  from { opacity: 0; }
  to { opacity: 1; }
}

.viewer-frame {
  position: relative;
  max-width: 100%;
  max-height: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
  animation: viewer-zoom 300ms ease both;
}

@keyframes viewer-zoom {
  from { transform: scale(0.9); opacity: 0; }
  to { transform: scale(1); opacity: 1; }
}

.viewer-image {
  max-width: 90vw;
  max-height: 85vh;
  object-fit: contain;
  border: 2px solid rgba(255, 255, 255, 0.05);
  border-radius: 2px;
}

.viewer-close {
  position: absolute;
  top: -3rem;
  right: 0;
  color: rgba(255, 255, 255, 0.7);
}

.viewer-close:hover {
  color: #ffffff;
}

/* === Small Screens === */
@media (max-width: 640px) {
  .title {
    font-size: 2.5rem;
  }

  .envelope-body {
    width: 16rem;
    height: 11rem;
  }

  .flap-triangle {
    border-left-width: 128px;
    border-right-width: 128px;
    border-top-width: 88px;
  }

  .envelope-seal {
    top: 40px;
  }

  .pocket-bottom {
    border-left-width: 128px;
    border-right-width: 128px;
    border-bottom-width: 88px;
  }

  .pocket-left,
  .pocket-right {
    border-top-width: 88px;
    border-bottom-width: 88px;
  }

  .pocket-left { border-left-width: 128px; }
  .pocket-right { border-right-width: 128px; }

  .close-letter {
    margin-top: 15rem;
  }

  .viewer-overlay {
    padding: 1rem;
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_cover_envelope_states() {
        assert!(GLOBAL_STYLES.contains(".envelope.closed:hover"));
        assert!(GLOBAL_STYLES.contains(".envelope.open .envelope-flap"));
        assert!(GLOBAL_STYLES.contains(".viewer-overlay"));
    }

    #[test]
    fn spring_easing_comes_from_motion_data() {
        assert!(!GLOBAL_STYLES.contains(lovenote_core::Easing::Spring.css()));
        assert!(!GLOBAL_STYLES.contains("@keyframes letter-reveal"));
    }
}
